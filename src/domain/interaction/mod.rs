//! Interaction module - UI controller state.
//!
//! Pure state machines driven by explicit events; nothing here touches a
//! live document or a clock.

mod accordion;
mod copy_feedback;
mod count_up;
mod debounce;
mod navigation;
mod progress;
mod quiz_phase;
mod reveal;
mod theme;

pub use accordion::Accordion;
pub use copy_feedback::{CopyFeedback, COPY_FEEDBACK_DURATION};
pub use count_up::{CountUp, StatLiteral, COUNT_UP_DURATION};
pub use debounce::{Debouncer, RESIZE_DEBOUNCE};
pub use navigation::{
    anchor_scroll_top, NavMenu, ScrollSpy, SectionBounds, TriggerBand, ESCAPE_KEY,
};
pub use progress::reading_progress;
pub use quiz_phase::QuizPhase;
pub use reveal::{RevealTracker, REVEAL_THRESHOLD};
pub use theme::{Theme, THEME_STORAGE_KEY};
