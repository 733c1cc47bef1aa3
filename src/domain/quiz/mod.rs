//! Quiz module - self-assessment scoring.
//!
//! - `answers` - answer accumulation
//! - `level_band` - total score to competency level
//! - `persona` - agency/literacy proxies and persona classification
//! - `engine` - the stateful attempt and the pure `evaluate` function
//! - `result` - computed outcome and its plain-text export

mod answers;
mod engine;
mod level_band;
mod persona;
mod result;

pub use answers::QuizAnswers;
pub use engine::{evaluate, QuizEngine, QuizError};
pub use level_band::LevelBand;
pub use persona::ProxyScores;
pub use result::QuizResult;
