//! Expand/collapse state for the level timeline.

use std::collections::BTreeSet;

/// Independently toggled entries keyed by level code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: BTreeSet<String>,
}

impl Accordion {
    /// Flips one entry and returns whether it is now expanded.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Value for the entry's `aria-expanded` attribute.
    pub fn aria_expanded(&self, key: &str) -> &'static str {
        if self.is_expanded(key) {
            "true"
        } else {
            "false"
        }
    }
}
