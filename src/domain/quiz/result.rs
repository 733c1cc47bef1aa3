//! Computed quiz outcome and its plain-text export.

use serde::Serialize;
use std::fmt::Write as _;

use super::level_band::LevelBand;
use super::persona::ProxyScores;
use crate::domain::content::{Persona, PersonaKey};
use crate::domain::foundation::messages::EXPORT_SOURCE;

/// Outcome of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub total_score: u32,
    pub max_score: u32,
    pub level: LevelBand,
    pub proxies: ProxyScores,
    pub persona_key: PersonaKey,
    pub persona: Persona,
}

impl QuizResult {
    /// Plain-text summary suitable for the clipboard.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "📊 Kết quả đánh giá năng lực làm việc với AI");
        out.push('\n');
        let _ = writeln!(out, "Level: {}", self.level);
        let _ = writeln!(out, "Persona: {}", self.persona.name);
        let _ = writeln!(out, "Tổng điểm: {}/{}", self.total_score, self.max_score);
        out.push('\n');
        out.push_str("3 bước nâng cấp tiếp theo:\n");
        for (i, step) in self.persona.upgrade.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, step);
        }
        out.push('\n');
        out.push_str("---\n");
        out.push_str(EXPORT_SOURCE);
        out
    }
}
