//! Document Approval Workflow
//!
//! This example drives a review workflow by trigger name.
//!
//! Key concepts:
//! - String states and named triggers
//! - Asking which triggers are legal before firing
//! - Telling "unknown trigger" apart from "not allowed right now"
//! - Audit logging from lifecycle hooks
//!
//! Run with: RUST_LOG=statecraft=debug cargo run --example document_workflow

use statecraft::{StateMachine, Transition, TransitionError};
use tracing_subscriber::EnvFilter;

// Audit sink fed by the after-transition hook
struct AuditLog {
    doc_id: u64,
}

impl AuditLog {
    fn record(&self, from: &str, to: &str) {
        println!("  [Audit] Document {} moved from {} to {}", self.doc_id, from, to);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Document Approval Workflow ===\n");

    let audit = AuditLog { doc_id: 123 };
    let mut machine: StateMachine = StateMachine::new();
    machine
        .states(["draft", "review", "published"])
        .add_transition(Transition::new("SUBMIT", "draft", "review"))
        .add_transition(Transition::new("APPROVE", "review", "published"))
        .add_transition(Transition::new("REJECT", "review", "draft"))
        .default_state("draft")
        .before_each_transition(|from: &String, to: &String| {
            println!("  About to move {from} -> {to}");
            Ok(())
        })
        .after_each_transition(move |from: &String, to: &String| {
            audit.record(from, to);
            Ok(())
        });

    for trigger in ["APPROVE", "SUBMIT", "REJECT", "submit", "PUBLISH", "approve"] {
        println!(
            "State: {:<10} allowed: {:?}",
            machine.current_state().map(String::as_str).unwrap_or("<none>"),
            machine.allowed_transitions()
        );
        println!("Firing {trigger}");

        match machine.fire(trigger) {
            Ok(_) => println!("  ✓ done\n"),
            Err(TransitionError::NotAllowed { from, .. }) => {
                println!("  ✗ {trigger} is not allowed from {from}\n")
            }
            Err(TransitionError::NotDefined { .. }) => {
                println!("  ✗ {trigger} is not a known trigger\n")
            }
            Err(other) => println!("  ✗ {other}\n"),
        }
    }

    println!("Key Takeaways:");
    println!("- allowed_transitions() is recomputed from the current state");
    println!("- Unknown and illegal triggers fail with different errors");
    println!("- fire() accepts any casing of a declared trigger");

    println!("\n=== Example Complete ===");
}
