//! Content document types.
//!
//! Mirrors the JSON document the article is built from. Every top-level
//! slice is optional: a missing slice means "render nothing", never an error.

use serde::{Deserialize, Serialize};

use super::quiz::QuizDefinition;
use crate::domain::foundation::Percentage;

/// Root of the article content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe_coder: Option<VibeCoder>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misconceptions: Option<Vec<Misconception>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_types: Option<Vec<UserType>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<Level>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<Conclusion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
}

impl ContentDocument {
    /// Characteristics of the "vibe coder" archetype, if present.
    pub fn characteristics(&self) -> Option<&[Characteristic]> {
        self.vibe_coder
            .as_ref()
            .and_then(|v| v.characteristics.as_deref())
    }

    /// Closing takeaways, if present.
    pub fn takeaways(&self) -> Option<&[String]> {
        self.conclusion.as_ref().and_then(|c| c.takeaways.as_deref())
    }
}

/// A headline statistic. `value` is a display literal such as `"120%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub source: String,
}

/// The "vibe coder" section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeCoder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<Vec<Characteristic>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristic {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub en: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Misconception {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub so_what: String,
}

/// A named point in the agency/literacy plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub en: String,
    pub description: String,
    #[serde(default)]
    pub philosophy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
    pub agency: Percentage,
    pub literacy: Percentage,
    pub color: String,
}

/// One rung of the competency ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub level: String,
    pub name: String,
    #[serde(default)]
    pub vn: String,
    pub color: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signs: Option<Vec<String>>,
    pub next_step: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl Level {
    /// Marker text for the timeline: the level code without its `L` prefix.
    pub fn marker(&self) -> String {
        self.level.replace('L', "")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conclusion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takeaways: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub source: String,
}
