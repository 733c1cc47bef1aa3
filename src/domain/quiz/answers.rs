//! Answers recorded during a quiz attempt.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::content::Score;

/// Mapping from question id to the chosen score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswers(BTreeMap<String, Score>);

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or overwrites the score for a question.
    pub fn record(&mut self, question_id: impl Into<String>, score: Score) {
        self.0.insert(question_id.into(), score);
    }

    pub fn get(&self, question_id: &str) -> Option<Score> {
        self.0.get(question_id).copied()
    }

    pub fn score_or_zero(&self, question_id: &str) -> u32 {
        self.get(question_id).map(u32::from).unwrap_or(0)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn total(&self) -> u32 {
        self.0.values().map(|s| u32::from(*s)).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, Score)> for QuizAnswers {
    fn from_iter<I: IntoIterator<Item = (K, Score)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
