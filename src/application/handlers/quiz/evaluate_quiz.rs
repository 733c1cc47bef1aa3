//! EvaluateQuizHandler - Stateless quiz scoring over a submitted answer set.

use crate::domain::content::ContentStore;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::quiz::{evaluate, QuizAnswers, QuizResult};

/// Command carrying a complete answer set.
#[derive(Debug, Clone)]
pub struct EvaluateQuizCommand {
    pub answers: QuizAnswers,
}

/// Scores answers against the loaded quiz without keeping any state, so one
/// handler can serve concurrent requests.
pub struct EvaluateQuizHandler {
    content: ContentStore,
}

impl EvaluateQuizHandler {
    pub fn new(content: ContentStore) -> Self {
        Self { content }
    }

    pub fn handle(&self, cmd: EvaluateQuizCommand) -> Result<QuizResult, DomainError> {
        let quiz = self.content.quiz().ok_or_else(|| {
            DomainError::new(ErrorCode::QuizUnavailable, "No quiz in the loaded content")
        })?;

        let result = evaluate(quiz, &cmd.answers).map_err(|e| {
            tracing::debug!(error = %e, "Quiz submission rejected");
            DomainError::from(e)
        })?;

        tracing::info!(
            total = result.total_score,
            level = %result.level,
            persona = %result.persona_key,
            "Quiz evaluated"
        );
        Ok(result)
    }
}
