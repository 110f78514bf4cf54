//! Case-insensitive trigger lookup for `fire`.

use std::collections::HashMap;

/// Maps normalized trigger names to the spelling they were declared with.
///
/// Kept in step with the machine's transition list at configuration time.
/// When two declared triggers normalize to the same key the first one wins,
/// mirroring first-match resolution in `transition_to`.
#[derive(Debug, Default, Clone)]
pub(crate) struct TriggerTable {
    by_key: HashMap<String, String>,
}

impl TriggerTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn normalize(name: &str) -> String {
        name.to_lowercase()
    }

    /// Rebuild from scratch for a replaced transition list.
    pub(crate) fn rebuild<'a>(&mut self, triggers: impl IntoIterator<Item = &'a str>) {
        self.by_key.clear();
        for trigger in triggers {
            self.insert(trigger);
        }
    }

    /// Record `trigger` unless its key is already taken.
    pub(crate) fn insert(&mut self, trigger: &str) {
        self.by_key
            .entry(Self::normalize(trigger))
            .or_insert_with(|| trigger.to_string());
    }

    /// The declared spelling for `name`, if any trigger matches it.
    pub(crate) fn resolve(&self, name: &str) -> Option<&str> {
        self.by_key.get(&Self::normalize(name)).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_any_casing_to_declared_spelling() {
        let mut table = TriggerTable::new();
        table.insert("APPROVE");

        assert_eq!(table.resolve("approve"), Some("APPROVE"));
        assert_eq!(table.resolve("Approve"), Some("APPROVE"));
        assert_eq!(table.resolve("APPROVE"), Some("APPROVE"));
        assert_eq!(table.resolve("reject"), None);
    }

    #[test]
    fn first_declaration_keeps_the_key() {
        let mut table = TriggerTable::new();
        table.insert("go");
        table.insert("GO");

        assert_eq!(table.resolve("Go"), Some("go"));
    }

    #[test]
    fn rebuild_forgets_old_triggers() {
        let mut table = TriggerTable::new();
        table.insert("SUBMIT");
        table.rebuild(["APPROVE", "REJECT"]);

        assert_eq!(table.resolve("submit"), None);
        assert_eq!(table.resolve("reject"), Some("REJECT"));
    }
}
