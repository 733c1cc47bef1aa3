//! Site output and interaction timing configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::SessionOptions;

const MAX_DURATION_MS: u64 = 60_000;

/// Static output, local state and session timings.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Directory `render` writes into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory holding the persisted theme
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,

    /// Initial chart width in pixels; unset means the 600px fallback
    pub chart_width: Option<f64>,

    /// Quiet period before a resize re-lays out the chart
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,

    /// How long the "copied" label stays after a successful copy
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

impl SiteConfig {
    /// Validate site configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(width) = self.chart_width {
            if !width.is_finite() || width <= 0.0 {
                return Err(ValidationError::InvalidChartWidth);
            }
        }
        check_duration("resize_debounce_ms", self.resize_debounce_ms)?;
        check_duration("copy_feedback_ms", self.copy_feedback_ms)?;
        Ok(())
    }

    /// Options for a `PageSession`; `render` opens its session with these.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            resize_debounce: Duration::from_millis(self.resize_debounce_ms),
            copy_feedback: Duration::from_millis(self.copy_feedback_ms),
            chart_width: self.chart_width,
        }
    }
}

fn check_duration(name: &'static str, ms: u64) -> Result<(), ValidationError> {
    if ms == 0 || ms > MAX_DURATION_MS {
        return Err(ValidationError::InvalidDuration(name));
    }
    Ok(())
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            state_dir: default_state_dir(),
            chart_width: None,
            resize_debounce_ms: default_resize_debounce_ms(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(".vibe-ladder")
}

fn default_resize_debounce_ms() -> u64 {
    150
}

fn default_copy_feedback_ms() -> u64 {
    2000
}
