//! Personality assessment
//!
//! Fixed question catalog, answer collection, and the classifier that maps
//! an answer set to one of four categories.

pub mod types;
pub mod catalog;
pub mod classifier;

// Re-export commonly used types
pub use types::{AnswerSet, Category, Question, OPTIONS_PER_QUESTION};
pub use catalog::questions;
pub use classifier::{classify, Classifier, Scoreboard};
