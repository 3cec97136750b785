use serde::Serialize;

use crate::model::Question;

/// What a presenter needs to render the session at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizSnapshot {
    InProgress {
        question: Question,
        selected_option: Option<String>,
        /// 1-based position of `question`.
        question_number: usize,
        total_questions: usize,
    },
    Complete {
        score: usize,
        total_questions: usize,
    },
}

impl QuizSnapshot {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        match self {
            Self::InProgress {
                total_questions, ..
            }
            | Self::Complete {
                total_questions, ..
            } => *total_questions,
        }
    }

    /// Submit is only meaningful while a selection is held.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(
            self,
            Self::InProgress {
                selected_option: Some(_),
                ..
            }
        )
    }
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}
