//! Chart layout - places user types on the agency/literacy scatter chart.

use serde::Serialize;

use crate::domain::content::UserType;

/// Width used when the canvas width is unknown.
pub const DEFAULT_CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 400.0;
pub const CHART_PADDING: f64 = 50.0;
/// Rendered marker diameter; points are shifted by half of it so the marker
/// is centred on its data point.
pub const MARKER_SIZE: f64 = 60.0;

/// Plot area the points are mapped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartCanvas {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ChartCanvas {
    /// Canvas of the given width; zero, negative or non-finite widths fall
    /// back to [`DEFAULT_CHART_WIDTH`].
    pub fn with_width(width: Option<f64>) -> Self {
        let width = width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(DEFAULT_CHART_WIDTH);
        Self {
            width,
            height: CHART_HEIGHT,
            padding: CHART_PADDING,
        }
    }

    fn offset(&self) -> f64 {
        MARKER_SIZE / 2.0
    }

    /// Top-left pixel position of the marker for one user type.
    pub fn position(&self, user_type: &UserType) -> (f64, f64) {
        let plot_width = self.width - 2.0 * self.padding;
        let plot_height = self.height - 2.0 * self.padding;
        let x = self.padding + user_type.agency.of(plot_width) - self.offset();
        let y = self.height - self.padding - user_type.literacy.of(plot_height) - self.offset();
        (x, y)
    }
}

impl Default for ChartCanvas {
    fn default() -> Self {
        Self::with_width(None)
    }
}

/// A positioned marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub range_label: &'static str,
}

/// Coarse level range printed inside each marker.
pub fn range_label(user_type_id: &str) -> &'static str {
    match user_type_id {
        "vibe-coder" => "L0-L2",
        "autopilot" => "L2-L3",
        "workflow-builder" => "L4",
        _ => "L5-L6",
    }
}

/// Maps every user type onto the canvas, preserving input order.
pub fn layout_points(user_types: &[UserType], canvas: &ChartCanvas) -> Vec<ChartPoint> {
    user_types
        .iter()
        .map(|t| {
            let (x, y) = canvas.position(t);
            ChartPoint {
                id: t.id.clone(),
                x,
                y,
                color: t.color.clone(),
                range_label: range_label(&t.id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;

    fn user_type(id: &str, agency: u8, literacy: u8) -> UserType {
        UserType {
            id: id.to_string(),
            name: id.to_string(),
            en: String::new(),
            description: String::new(),
            philosophy: String::new(),
            risk: None,
            agency: Percentage::try_new(f64::from(agency)).unwrap(),
            literacy: Percentage::try_new(f64::from(literacy)).unwrap(),
            color: "#000".to_string(),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn origin_maps_to_bottom_left() {
        let canvas = ChartCanvas::with_width(Some(800.0));
        let (x, y) = canvas.position(&user_type("a", 0, 0));
        assert!(approx(x, 50.0 - 30.0));
        assert!(approx(y, 400.0 - 50.0 - 30.0));
    }

    #[test]
    fn full_scores_map_to_top_right() {
        let canvas = ChartCanvas::with_width(Some(800.0));
        let (x, y) = canvas.position(&user_type("a", 100, 100));
        assert!(approx(x, 800.0 - 50.0 - 30.0));
        assert!(approx(y, 50.0 - 30.0));
    }

    #[test]
    fn midpoint_is_centred() {
        let canvas = ChartCanvas::default();
        let (x, y) = canvas.position(&user_type("a", 50, 50));
        assert!(approx(x, 50.0 + 250.0 - 30.0));
        assert!(approx(y, 350.0 - 150.0 - 30.0));
    }

    #[test]
    fn unknown_width_falls_back_to_default() {
        assert!(approx(ChartCanvas::with_width(None).width, DEFAULT_CHART_WIDTH));
        assert!(approx(ChartCanvas::with_width(Some(0.0)).width, DEFAULT_CHART_WIDTH));
        assert!(approx(ChartCanvas::with_width(Some(f64::NAN)).width, DEFAULT_CHART_WIDTH));
    }

    #[test]
    fn range_labels_follow_lookup() {
        assert_eq!(range_label("vibe-coder"), "L0-L2");
        assert_eq!(range_label("autopilot"), "L2-L3");
        assert_eq!(range_label("workflow-builder"), "L4");
        assert_eq!(range_label("system-architect"), "L5-L6");
        assert_eq!(range_label(""), "L5-L6");
    }

    #[test]
    fn layout_preserves_order() {
        let types = vec![user_type("autopilot", 10, 20), user_type("vibe-coder", 5, 5)];
        let points = layout_points(&types, &ChartCanvas::default());
        let ids: Vec<&str> = points.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["autopilot", "vibe-coder"]);
        assert_eq!(points[1].range_label, "L0-L2");
    }

    #[test]
    fn wider_canvas_moves_points_right() {
        let t = user_type("a", 60, 40);
        let (narrow, _) = ChartCanvas::with_width(Some(400.0)).position(&t);
        let (wide, _) = ChartCanvas::with_width(Some(1000.0)).position(&t);
        assert!(wide > narrow);
    }
}
