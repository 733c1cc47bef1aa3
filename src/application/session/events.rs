//! Events a page session reacts to and the updates it reports back.

use crate::domain::content::Score;
use crate::domain::interaction::{CountUp, SectionBounds, Theme};
use crate::ports::Fragment;

/// A user or viewport event, with everything the handler needs carried in
/// the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    ToggleTheme,
    ToggleMenu,
    /// A navigation link was followed.
    NavLinkClicked {
        target_top: f64,
        header_height: f64,
    },
    KeyPressed {
        key: String,
    },
    Scrolled {
        scroll_y: f64,
        scroll_height: f64,
        viewport_height: f64,
        /// Section geometry relative to the viewport, in document order.
        sections: Vec<SectionBounds>,
    },
    Intersected {
        element_id: String,
        ratio: f64,
    },
    Resized {
        chart_width: f64,
    },
    /// Lets time-based state (debounced resize, copy feedback) advance.
    Tick,
    ToggleLevel {
        level: String,
    },
    StartQuiz,
    SelectAnswer {
        question_id: String,
        score: Score,
    },
    SubmitQuiz,
    ResetQuiz,
    CopyResult,
}

/// What changed as a result of one event.
#[derive(Debug, Clone, Default)]
pub struct PageUpdate {
    /// Re-rendered mount points.
    pub fragments: Vec<Fragment>,
    pub theme: Option<Theme>,
    pub menu_open: Option<bool>,
    /// Absolute scroll position to move to.
    pub scroll_to: Option<f64>,
    pub reading_progress: Option<f64>,
    pub active_section: Option<String>,
    /// Element revealed for the first time.
    pub revealed: Option<String>,
    /// Count-up animations to start, in stat order.
    pub count_ups: Vec<CountUp>,
    /// Message to surface to the reader.
    pub message: Option<String>,
}

impl PageUpdate {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
            && self.theme.is_none()
            && self.menu_open.is_none()
            && self.scroll_to.is_none()
            && self.reading_progress.is_none()
            && self.active_section.is_none()
            && self.revealed.is_none()
            && self.count_ups.is_empty()
            && self.message.is_none()
    }
}
