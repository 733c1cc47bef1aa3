//! Quiz definition as authored in the content document.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Score a single answer contributes.
pub type Score = u8;

/// The quiz slice of the content document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDefinition {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,

    /// Keys outside the four known buckets are dropped on load.
    #[serde(default, deserialize_with = "known_personas")]
    pub persona_mapping: PersonaMapping,
}

impl QuizDefinition {
    /// Finds a question by id.
    pub fn question(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Highest achievable total: the sum of each question's top score.
    pub fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .map(|q| q.max_score().map(u32::from).unwrap_or(0))
            .sum()
    }
}

/// A single quiz question.
///
/// `scoring` maps each offered score to its option text. JSON object keys are
/// strings ("0", "1", ...) and are parsed into integers on load; options are
/// presented in ascending score order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub detail: String,
    pub scoring: BTreeMap<Score, String>,
}

impl QuizQuestion {
    /// Whether `score` is one of the options this question offers.
    pub fn offers(&self, score: Score) -> bool {
        self.scoring.contains_key(&score)
    }

    pub fn max_score(&self) -> Option<Score> {
        self.scoring.keys().next_back().copied()
    }
}

/// Persona classification buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaKey {
    LowLow,
    LowHigh,
    MediumHigh,
    HighHigh,
}

impl PersonaKey {
    pub const ALL: [PersonaKey; 4] = [
        PersonaKey::LowLow,
        PersonaKey::LowHigh,
        PersonaKey::MediumHigh,
        PersonaKey::HighHigh,
    ];

    /// Parses a snake_case key, `None` for anything unrecognised.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaKey::LowLow => "low_low",
            PersonaKey::LowHigh => "low_high",
            PersonaKey::MediumHigh => "medium_high",
            PersonaKey::HighHigh => "high_high",
        }
    }
}

impl fmt::Display for PersonaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named behavioural archetype with its suggested upgrade path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub upgrade: Vec<String>,
}

pub type PersonaMapping = BTreeMap<PersonaKey, Persona>;

fn known_personas<'de, D>(deserializer: D) -> Result<PersonaMapping, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Persona>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, persona)| match PersonaKey::parse(&key) {
            Some(known) => Some((known, persona)),
            None => {
                tracing::warn!(persona_key = %key, "Ignoring unknown persona key");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition() -> QuizDefinition {
        serde_json::from_value(json!({
            "questions": [
                { "id": "q1", "text": "t1", "detail": "d1",
                  "scoring": { "2": "two", "0": "zero", "1": "one" } },
                { "id": "q2", "text": "t2", "detail": "d2",
                  "scoring": { "0": "zero", "1": "one" } }
            ],
            "personaMapping": {
                "low_low": { "name": "Explorer", "condition": "c", "upgrade": ["u1"] },
                "high_high": { "name": "Architect", "condition": "c", "upgrade": [] }
            }
        }))
        .unwrap()
    }

    #[test]
    fn scoring_keys_parse_as_integers_in_ascending_order() {
        let quiz = definition();
        let q1 = quiz.question("q1").unwrap();
        let scores: Vec<Score> = q1.scoring.keys().copied().collect();
        assert_eq!(scores, vec![0, 1, 2]);
        assert_eq!(q1.scoring[&2], "two");
    }

    #[test]
    fn offers_only_declared_scores() {
        let quiz = definition();
        let q2 = quiz.question("q2").unwrap();
        assert!(q2.offers(1));
        assert!(!q2.offers(2));
    }

    #[test]
    fn max_score_sums_top_option_of_each_question() {
        assert_eq!(definition().max_score(), 3);
    }

    #[test]
    fn persona_mapping_keys_use_snake_case() {
        let quiz = definition();
        assert_eq!(quiz.persona_mapping[&PersonaKey::LowLow].name, "Explorer");
        assert!(!quiz.persona_mapping.contains_key(&PersonaKey::MediumHigh));
        assert_eq!(PersonaKey::MediumHigh.to_string(), "medium_high");
    }

    #[test]
    fn unknown_persona_keys_are_skipped() {
        let quiz: QuizDefinition = serde_json::from_value(json!({
            "questions": [],
            "personaMapping": {
                "low_low": { "name": "Explorer" },
                "mid_mid": { "name": "Drifter" }
            }
        }))
        .unwrap();

        assert_eq!(quiz.persona_mapping.len(), 1);
        assert_eq!(quiz.persona_mapping[&PersonaKey::LowLow].name, "Explorer");
    }

    #[test]
    fn parse_accepts_only_known_keys() {
        for key in PersonaKey::ALL {
            assert_eq!(PersonaKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(PersonaKey::parse("mid_mid"), None);
    }
}
