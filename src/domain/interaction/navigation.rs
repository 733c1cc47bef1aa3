//! Navigation - mobile menu, anchor scrolling and scroll-spy.

use serde::Serialize;

/// Key that dismisses the mobile menu.
pub const ESCAPE_KEY: &str = "Escape";

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a menu link always closes the menu.
    pub fn on_link_click(&mut self) {
        self.open = false;
    }

    /// Returns true when the key closed an open menu.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.open {
            self.open = false;
            return true;
        }
        false
    }
}

/// Scroll position for an in-page anchor, leaving room for the fixed header.
pub fn anchor_scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    (target_offset_top - header_height).max(0.0)
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }
}

/// Horizontal band of the viewport that decides the active section.
///
/// Expressed as fractions of the viewport height. The default band spans 20%
/// to 30% from the top, so a section becomes active slightly after its
/// heading passes under the header rather than at the exact viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    pub top_ratio: f64,
    pub bottom_ratio: f64,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            top_ratio: 0.2,
            bottom_ratio: 0.3,
        }
    }
}

impl TriggerBand {
    fn intersects(&self, viewport_height: f64, section: &SectionBounds) -> bool {
        let band_top = viewport_height * self.top_ratio;
        let band_bottom = viewport_height * self.bottom_ratio;
        section.top < band_bottom && section.bottom > band_top
    }
}

/// Tracks which navigation entry is highlighted.
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    band: TriggerBand,
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new(band: TriggerBand) -> Self {
        Self { band, active: None }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Re-evaluates the highlight after a scroll.
    ///
    /// Sections are given in document order; when several intersect the band
    /// the last one wins. When none does, the previous highlight is kept.
    pub fn on_scroll(&mut self, viewport_height: f64, sections: &[SectionBounds]) -> Option<&str> {
        if let Some(hit) = sections
            .iter()
            .rev()
            .find(|s| self.band.intersects(viewport_height, s))
        {
            self.active = Some(hit.id.clone());
        }
        self.active()
    }

    /// Whether a nav link (`href="#id"`) is the highlighted one.
    pub fn is_active_link(&self, href: &str) -> bool {
        match (self.active(), href.strip_prefix('#')) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }
}
