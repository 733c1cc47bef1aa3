//! Reading progress bar.

/// Percentage of the page scrolled, clamped to `0..=100`.
///
/// A page that does not scroll reports 0.
pub fn reading_progress(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}
