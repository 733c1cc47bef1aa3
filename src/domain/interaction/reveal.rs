//! One-shot reveal-on-scroll tracking.

use std::collections::BTreeSet;

/// Visible fraction an element needs before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Tracks which elements are observed and which have been revealed.
///
/// An element is revealed the first time it intersects the viewport with at
/// least the threshold ratio, and is unobserved at that moment.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    observed: BTreeSet<String>,
    revealed: BTreeSet<String>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: BTreeSet::new(),
            revealed: BTreeSet::new(),
        }
    }

    /// Starts observing an element. Already revealed elements are ignored.
    pub fn observe(&mut self, element_id: impl Into<String>) {
        let id = element_id.into();
        if !self.revealed.contains(&id) {
            self.observed.insert(id);
        }
    }

    pub fn is_observed(&self, element_id: &str) -> bool {
        self.observed.contains(element_id)
    }

    pub fn is_revealed(&self, element_id: &str) -> bool {
        self.revealed.contains(element_id)
    }

    /// Handles an intersection report. Returns true only on the first reveal.
    pub fn on_intersection(&mut self, element_id: &str, ratio: f64) -> bool {
        if ratio < self.threshold || !self.observed.remove(element_id) {
            return false;
        }
        self.revealed.insert(element_id.to_string());
        true
    }
}
