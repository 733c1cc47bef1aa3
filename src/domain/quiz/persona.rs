//! Persona classification from the agency/literacy proxies.

use serde::Serialize;

use super::answers::QuizAnswers;
use crate::domain::content::PersonaKey;

/// Question feeding the agency proxy only.
pub const AGENCY_QUESTION: &str = "q1";
/// Question feeding both proxies.
pub const SHARED_QUESTION: &str = "q2";
/// Question feeding the literacy proxy only.
pub const LITERACY_QUESTION: &str = "q3";

/// Derived axes used only for persona selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProxyScores {
    pub agency: u32,
    pub literacy: u32,
}

impl ProxyScores {
    /// Builds the proxies from recorded answers. Missing answers count as 0.
    pub fn from_answers(answers: &QuizAnswers) -> Self {
        let q1 = answers.score_or_zero(AGENCY_QUESTION);
        let q2 = answers.score_or_zero(SHARED_QUESTION);
        let q3 = answers.score_or_zero(LITERACY_QUESTION);
        Self {
            agency: q1 + q2,
            literacy: q2 + q3,
        }
    }

    /// Applies the decision table.
    ///
    /// The branches are asymmetric: once agency exceeds 2 the literacy cut
    /// moves from 2 to 3.
    pub fn classify(&self) -> PersonaKey {
        if self.agency <= 2 && self.literacy <= 2 {
            PersonaKey::LowLow
        } else if self.agency <= 2 {
            PersonaKey::LowHigh
        } else if self.literacy <= 3 {
            PersonaKey::MediumHigh
        } else {
            PersonaKey::HighHigh
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proxies(agency: u32, literacy: u32) -> ProxyScores {
        ProxyScores { agency, literacy }
    }

    #[test]
    fn boundary_cases_follow_the_table() {
        assert_eq!(proxies(2, 2).classify(), PersonaKey::LowLow);
        assert_eq!(proxies(2, 3).classify(), PersonaKey::LowHigh);
        assert_eq!(proxies(3, 3).classify(), PersonaKey::MediumHigh);
        assert_eq!(proxies(3, 4).classify(), PersonaKey::HighHigh);
    }

    #[test]
    fn low_agency_never_reaches_medium_or_high() {
        for literacy in 0..=8 {
            let key = proxies(0, literacy).classify();
            assert!(matches!(key, PersonaKey::LowLow | PersonaKey::LowHigh));
        }
    }

    #[test]
    fn high_agency_with_low_literacy_is_medium_high() {
        assert_eq!(proxies(4, 0).classify(), PersonaKey::MediumHigh);
    }

    #[test]
    fn proxies_share_the_middle_question() {
        let mut answers = QuizAnswers::new();
        answers.record("q1", 1);
        answers.record("q2", 2);
        answers.record("q3", 0);

        let p = ProxyScores::from_answers(&answers);
        assert_eq!(p, proxies(3, 2));
    }

    #[test]
    fn missing_answers_count_as_zero() {
        let mut answers = QuizAnswers::new();
        answers.record("q3", 2);

        assert_eq!(ProxyScores::from_answers(&answers), proxies(0, 2));
    }
}
