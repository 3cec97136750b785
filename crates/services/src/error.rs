//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::QuizError;
use quiz_core::model::QuestionError;

/// Errors emitted while building a `QuestionBank`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("failed to read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error("question bank has no questions")]
    Empty,
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
