//! Scoped debouncer.

use std::time::{Duration, Instant};

/// Quiet period before a resize triggers a chart re-layout.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Holds the latest value until `delay` passes without a newer one.
///
/// Each [`Debouncer::push`] supersedes the pending value and restarts the
/// quiet period. The caller drives time explicitly through `now`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    /// Releases the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((due, _)) if now >= *due => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
