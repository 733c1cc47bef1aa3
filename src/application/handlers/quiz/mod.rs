//! Quiz handlers.

mod copy_result;
mod evaluate_quiz;

pub use copy_result::CopyResultHandler;
pub use evaluate_quiz::{EvaluateQuizCommand, EvaluateQuizHandler};
