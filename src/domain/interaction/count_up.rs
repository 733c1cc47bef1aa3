//! Count-up animation for headline stat values.

use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

/// Default length of the count-up.
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(2000);

static STAT_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\$)?(\d+(?:\.(\d+))?)([%+A-Za-z]*)$").expect("stat literal pattern is valid")
});

/// A stat display literal split into its animatable parts.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLiteral {
    pub prefix: String,
    pub value: f64,
    pub suffix: String,
    pub decimals: usize,
    original: String,
}

impl StatLiteral {
    /// Parses `"120%"`, `"$4.5M"` and similar. Returns `None` for anything
    /// that is not a plain number with an optional `$` prefix and unit suffix.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = STAT_LITERAL.captures(raw.trim())?;
        let value: f64 = caps.get(2)?.as_str().parse().ok()?;
        Some(Self {
            prefix: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
            value,
            suffix: caps.get(4).map(|m| m.as_str().to_string()).unwrap_or_default(),
            decimals: caps.get(3).map(|m| m.as_str().len()).unwrap_or(0),
            original: raw.to_string(),
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Formats an intermediate magnitude with this literal's prefix, suffix
    /// and precision.
    pub fn format(&self, magnitude: f64) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix, self.decimals, magnitude, self.suffix
        )
    }
}

/// Frames of a count-up from zero to a stat's final value.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: Option<StatLiteral>,
    raw: String,
    duration: Duration,
}

impl CountUp {
    pub fn new(raw: &str, duration: Duration) -> Self {
        Self {
            target: StatLiteral::parse(raw),
            raw: raw.to_string(),
            duration,
        }
    }

    /// Whether the literal animates at all; unparseable values are shown
    /// verbatim from the first frame.
    pub fn is_animated(&self) -> bool {
        self.target.is_some()
    }

    /// Text to display `elapsed` after the reveal.
    ///
    /// The last frame is the original literal, never a re-formatted float.
    pub fn frame(&self, elapsed: Duration) -> String {
        let Some(target) = &self.target else {
            return self.raw.clone();
        };
        if self.duration.is_zero() || elapsed >= self.duration {
            return target.original().to_string();
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        target.format(target.value * ease_out_cubic(progress))
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}
