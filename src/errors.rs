//! Error types for huidong
//!
//! The classifier and plan adjuster are total functions and never fail.
//! Errors only arise at the boundary: collecting answers, reading the
//! scratch store, and loading configuration.

use thiserror::Error;

/// Main error type for the huidong questionnaire
#[derive(Error, Debug)]
pub enum HuidongError {
    /// Answer index outside the four option positions
    #[error("Invalid answer for question {question_id}: option index {index} is not in 0..=3")]
    InvalidAnswer { question_id: u32, index: usize },

    /// Answer keyed by an id that is not in the question catalog
    #[error("Unknown question id: {0}")]
    UnknownQuestion(u32),

    /// Submission attempted before every question was answered
    #[error("Assessment incomplete: {answered} of {total} questions answered")]
    IncompleteAnswers { answered: usize, total: usize },

    /// Category label not among the four fixed values
    #[error("Unknown personality category: {0}")]
    UnknownCategory(String),

    /// Malformed `ID=IDX` answer on the command line
    #[error("Invalid answer spec '{0}': expected QUESTION_ID=OPTION_INDEX")]
    InvalidAnswerSpec(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Scratch store errors
    #[error("Session storage error: {0}")]
    StorageError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for huidong operations
pub type Result<T> = std::result::Result<T, HuidongError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_answer_display() {
        let err = HuidongError::InvalidAnswer {
            question_id: 3,
            index: 7,
        };
        assert!(err.to_string().contains("question 3"));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_incomplete_answers_display() {
        let err = HuidongError::IncompleteAnswers {
            answered: 2,
            total: 5,
        };
        assert_eq!(err.to_string(), "Assessment incomplete: 2 of 5 questions answered");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HuidongError = io.into();
        assert!(matches!(err, HuidongError::IoError(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        fn parse(raw: &str) -> Result<Vec<u32>> {
            Ok(serde_json::from_str(raw)?)
        }
        assert!(matches!(parse("[1,"), Err(HuidongError::SerializationError(_))));
        assert_eq!(parse("[1,2]").unwrap(), vec![1, 2]);
    }
}
