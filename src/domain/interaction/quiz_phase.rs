//! Which part of the quiz panel is visible.

use serde::Serialize;

use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    /// Intro card with the start button.
    #[default]
    Intro,
    /// Question list with answer options.
    Answering,
    /// Result panel.
    Result,
}

impl StateMachine for QuizPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            QuizPhase::Intro => vec![QuizPhase::Answering],
            QuizPhase::Answering => vec![QuizPhase::Result, QuizPhase::Intro],
            QuizPhase::Result => vec![QuizPhase::Intro],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_intro() {
        assert_eq!(QuizPhase::default(), QuizPhase::Intro);
    }

    #[test]
    fn full_cycle_is_valid() {
        let phase = QuizPhase::Intro
            .transition_to(QuizPhase::Answering)
            .and_then(|p| p.transition_to(QuizPhase::Result))
            .and_then(|p| p.transition_to(QuizPhase::Intro));
        assert_eq!(phase, Ok(QuizPhase::Intro));
    }

    #[test]
    fn result_cannot_be_reached_from_intro() {
        assert!(QuizPhase::Intro.transition_to(QuizPhase::Result).is_err());
        assert!(!QuizPhase::Result.can_transition_to(&QuizPhase::Answering));
    }

    #[test]
    fn no_phase_is_terminal() {
        for phase in [QuizPhase::Intro, QuizPhase::Answering, QuizPhase::Result] {
            assert!(!phase.is_terminal());
        }
    }
}
