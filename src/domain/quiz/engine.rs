//! Quiz engine - answer accumulation and scoring.

use thiserror::Error;

use super::answers::QuizAnswers;
use super::level_band::LevelBand;
use super::persona::ProxyScores;
use super::result::QuizResult;
use crate::domain::content::{PersonaKey, QuizDefinition, Score};
use crate::domain::foundation::messages::{
    PERSONA_MISSING, QUIZ_INCOMPLETE, SCORE_NOT_OFFERED, UNKNOWN_QUESTION,
};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while answering or scoring the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Quiz incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Question '{question_id}' does not offer score {score}")]
    ScoreNotOffered { question_id: String, score: Score },

    #[error("No persona configured for '{0}'")]
    PersonaMissing(PersonaKey),
}

impl QuizError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QuizError::Incomplete { .. } => ErrorCode::QuizIncomplete,
            QuizError::UnknownQuestion(_) => ErrorCode::UnknownQuestion,
            QuizError::ScoreNotOffered { .. } => ErrorCode::ScoreNotOffered,
            QuizError::PersonaMissing(_) => ErrorCode::PersonaMissing,
        }
    }

    /// Message shown to the reader.
    pub fn user_message(&self) -> &'static str {
        match self {
            QuizError::Incomplete { .. } => QUIZ_INCOMPLETE,
            QuizError::UnknownQuestion(_) => UNKNOWN_QUESTION,
            QuizError::ScoreNotOffered { .. } => SCORE_NOT_OFFERED,
            QuizError::PersonaMissing(_) => PERSONA_MISSING,
        }
    }
}

impl From<QuizError> for DomainError {
    fn from(error: QuizError) -> Self {
        let domain = DomainError::new(error.code(), error.user_message());
        match error {
            QuizError::Incomplete { answered, total } => domain
                .with_detail("answered", answered.to_string())
                .with_detail("total", total.to_string()),
            QuizError::UnknownQuestion(question_id) => {
                domain.with_detail("question_id", question_id)
            }
            QuizError::ScoreNotOffered { question_id, score } => domain
                .with_detail("question_id", question_id)
                .with_detail("score", score.to_string()),
            QuizError::PersonaMissing(key) => domain.with_detail("persona_key", key.as_str()),
        }
    }
}

/// Scores a complete answer set against a quiz definition.
///
/// Pure: the same answers always produce the same result.
pub fn evaluate(quiz: &QuizDefinition, answers: &QuizAnswers) -> Result<QuizResult, QuizError> {
    for (question_id, score) in answers.iter() {
        validate_choice(quiz, question_id, score)?;
    }

    let total = quiz.questions.len();
    let answered = quiz
        .questions
        .iter()
        .filter(|q| answers.contains(&q.id))
        .count();
    if answered < total {
        return Err(QuizError::Incomplete { answered, total });
    }

    let total_score = answers.total();
    let proxies = ProxyScores::from_answers(answers);
    let persona_key = proxies.classify();
    let persona = quiz
        .persona_mapping
        .get(&persona_key)
        .cloned()
        .ok_or(QuizError::PersonaMissing(persona_key))?;

    Ok(QuizResult {
        total_score,
        max_score: quiz.max_score(),
        level: LevelBand::from_total(total_score),
        proxies,
        persona_key,
        persona,
    })
}

fn validate_choice(quiz: &QuizDefinition, question_id: &str, score: Score) -> Result<(), QuizError> {
    let question = quiz
        .question(question_id)
        .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_string()))?;
    if !question.offers(score) {
        return Err(QuizError::ScoreNotOffered {
            question_id: question_id.to_string(),
            score,
        });
    }
    Ok(())
}

/// Stateful quiz attempt.
///
/// Created empty at quiz start; answers accumulate through
/// [`QuizEngine::select_answer`] and are discarded on [`QuizEngine::reset`].
#[derive(Debug, Clone)]
pub struct QuizEngine {
    quiz: QuizDefinition,
    answers: QuizAnswers,
    result: Option<QuizResult>,
}

impl QuizEngine {
    pub fn new(quiz: QuizDefinition) -> Self {
        Self {
            quiz,
            answers: QuizAnswers::new(),
            result: None,
        }
    }

    pub fn definition(&self) -> &QuizDefinition {
        &self.quiz
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    /// Last successfully computed result, if any.
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Records or overwrites the score for a question.
    ///
    /// Unknown questions and scores the question does not offer are rejected
    /// and leave the recorded answers untouched.
    pub fn select_answer(&mut self, question_id: &str, score: Score) -> Result<(), QuizError> {
        validate_choice(&self.quiz, question_id, score)?;
        self.answers.record(question_id, score);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.quiz
            .questions
            .iter()
            .all(|q| self.answers.contains(&q.id))
    }

    /// Scores the current answers.
    ///
    /// On failure the answers and any previous result are left as they were.
    pub fn compute_result(&mut self) -> Result<&QuizResult, QuizError> {
        let result = evaluate(&self.quiz, &self.answers)?;
        Ok(&*self.result.insert(result))
    }

    /// Clears every answer and the derived result.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.result = None;
    }
}
