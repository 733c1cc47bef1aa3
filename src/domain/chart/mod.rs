//! Chart module - scatter chart coordinate mapping.

mod layout;

pub use layout::{
    layout_points, range_label, ChartCanvas, ChartPoint, CHART_HEIGHT, CHART_PADDING,
    DEFAULT_CHART_WIDTH, MARKER_SIZE,
};
