//! Content module - the article's source document.

mod document;
mod quiz;
mod store;

pub use document::{
    Characteristic, Conclusion, ContentDocument, Level, Misconception, Reference, Stat, UserType,
    VibeCoder,
};
pub use quiz::{Persona, PersonaKey, PersonaMapping, QuizDefinition, QuizQuestion, Score};
pub use store::ContentStore;
