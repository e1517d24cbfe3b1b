//! Accordion disclosure state.
//!
//! Any number of panels may be open at once. Panels are named by string ids
//! so the set can be rendered straight into DOM attributes.

use std::collections::BTreeSet;

/// Keys that toggle a focused panel header.
pub const TOGGLE_KEYS: [&str; 2] = ["Enter", " "];

/// Whether a key name (as reported by the DOM) toggles a header.
pub fn is_toggle_key(key: &str) -> bool {
    TOGGLE_KEYS.contains(&key)
}

/// Set of expanded panel ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: BTreeSet<String>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flip membership of `id`, returning whether it is now open.
    pub fn toggle(&mut self, id: &str) -> bool {
        let open = if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string())
        };
        tracing::trace!(panel = id, open, "accordion toggled");
        open
    }

    /// Toggle on Enter or Space; other keys are ignored.
    ///
    /// Returns true when the key was consumed, so the caller can suppress
    /// the default action.
    pub fn handle_key(&mut self, id: &str, key: &str) -> bool {
        if !is_toggle_key(key) {
            return false;
        }
        self.toggle(id);
        true
    }

    pub fn expanded(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut acc = Accordion::new();
        assert!(acc.toggle("why-card"));
        assert!(acc.is_expanded("why-card"));
        assert!(!acc.toggle("why-card"));
        assert!(!acc.is_expanded("why-card"));
        assert!(acc.is_empty());
    }

    #[test]
    fn multiple_panels_stay_open() {
        let mut acc = Accordion::new();
        acc.toggle("why-card");
        acc.toggle("future-use");
        assert_eq!(acc.len(), 2);
        assert_eq!(acc.expanded().collect::<Vec<_>>(), vec!["future-use", "why-card"]);
    }

    #[test]
    fn enter_and_space_toggle() {
        let mut acc = Accordion::new();
        assert!(acc.handle_key("why-card", "Enter"));
        assert!(acc.is_expanded("why-card"));
        assert!(acc.handle_key("why-card", " "));
        assert!(!acc.is_expanded("why-card"));
    }

    #[test]
    fn other_keys_ignored() {
        let mut acc = Accordion::new();
        assert!(!acc.handle_key("why-card", "Tab"));
        assert!(!acc.handle_key("why-card", "a"));
        assert!(acc.is_empty());
    }
}
