//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Enum states via the state_enum! macro
//! - Consuming builder with a configuration lint
//! - No terminal state: the cycle runs indefinitely
//!
//! Run with: cargo run --example traffic_light

use statecraft::builder::StateMachineBuilder;
use statecraft::{state_enum, Transition};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachineBuilder::<TrafficLight>::new()
        .states([TrafficLight::Red, TrafficLight::Yellow, TrafficLight::Green])
        .default_state(TrafficLight::Red)
        .transitions(vec![
            Transition::new("GO", TrafficLight::Red, TrafficLight::Green),
            Transition::new("SLOW", TrafficLight::Green, TrafficLight::Yellow),
            Transition::new("STOP", TrafficLight::Yellow, TrafficLight::Red),
        ])
        .after_each_transition(|from: &TrafficLight, to: &TrafficLight| {
            println!("  {from} -> {to}");
            Ok(())
        })
        .build_validated()
        .expect("traffic light configuration is consistent");

    println!("Two full cycles:");
    for _ in 0..2 {
        for trigger in ["go", "slow", "stop"] {
            if let Err(err) = machine.fire(trigger) {
                println!("  ✗ {err}");
            }
        }
    }

    println!("\nSkipping a phase is rejected:");
    if let Err(err) = machine.fire("slow") {
        println!("  ✗ {err}");
    }

    println!("\n=== Example Complete ===");
}
