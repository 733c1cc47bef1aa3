//! Transient "copied" affordance on the copy button.

use std::time::{Duration, Instant};

use crate::domain::foundation::messages::{COPIED_LABEL, COPY_LABEL};

/// How long the "copied" label stays before reverting.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct CopyFeedback {
    duration: Duration,
    copied_at: Option<Instant>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK_DURATION)
    }
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            copied_at: None,
        }
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_showing(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_showing(now) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}
