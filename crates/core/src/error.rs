use thiserror::Error;

/// Coarse classification of `QuizError`, for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input: construction data or an option the current question does not offer.
    InvalidArgument,
    /// An operation that is not allowed right now, such as submitting with no selection.
    InvalidOperation,
    /// Selecting after the quiz is complete.
    InvalidState,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("{option:?} is not an option of the current question")]
    UnknownOption { option: String },

    #[error("no option selected")]
    NoSelection,

    #[error("quiz already completed")]
    Completed,

    #[error("cannot select an option after the quiz is complete")]
    SelectAfterComplete,
}

impl QuizError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoQuestions | Self::UnknownOption { .. } => ErrorKind::InvalidArgument,
            Self::NoSelection | Self::Completed => ErrorKind::InvalidOperation,
            Self::SelectAfterComplete => ErrorKind::InvalidState,
        }
    }
}
