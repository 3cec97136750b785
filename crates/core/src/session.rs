use std::fmt;

use crate::error::QuizError;
use crate::model::{Question, QuizProgress, QuizSnapshot};

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run-through of a fixed, ordered list of questions.
///
/// The session steps through the questions sequentially. Each question takes one
/// selection, which `submit` scores and clears before moving on. Once every question
/// has been submitted the session is complete and keeps its final score until `reset`.
pub struct QuizSession {
    questions: Vec<Question>,
    // `current == questions.len()` means complete.
    current: usize,
    selected: Option<String>,
    score: usize,
}

impl QuizSession {
    /// Create a session positioned on the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        Ok(Self {
            questions,
            current: 0,
            selected: None,
            score: 0,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// 0-based index of the active question; equals `total_questions()` once complete.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            answered: self.current,
            remaining: self.questions.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Snapshot of the current state. Has no side effects.
    #[must_use]
    pub fn current(&self) -> QuizSnapshot {
        match self.current_question() {
            Some(question) => QuizSnapshot::InProgress {
                question: question.clone(),
                selected_option: self.selected.clone(),
                question_number: self.current + 1,
                total_questions: self.total_questions(),
            },
            None => QuizSnapshot::Complete {
                score: self.score,
                total_questions: self.total_questions(),
            },
        }
    }

    /// Select an option for the current question, replacing any earlier selection.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::SelectAfterComplete` if the session is complete.
    /// Returns `QuizError::UnknownOption` if the current question does not offer `option`.
    pub fn select_option(&mut self, option: impl Into<String>) -> Result<(), QuizError> {
        let option = option.into();
        let Some(question) = self.current_question() else {
            return Err(QuizError::SelectAfterComplete);
        };
        if !question.has_option(&option) {
            return Err(QuizError::UnknownOption { option });
        }

        self.selected = Some(option);
        Ok(())
    }

    /// Score the selection and advance to the next question.
    ///
    /// Returns whether the submitted answer was correct. State is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if the session is already complete.
    /// Returns `QuizError::NoSelection` if nothing has been selected.
    pub fn submit(&mut self) -> Result<bool, QuizError> {
        let Some(question) = self.current_question() else {
            return Err(QuizError::Completed);
        };
        let Some(selected) = self.selected.as_deref() else {
            return Err(QuizError::NoSelection);
        };

        let correct = question.is_correct(selected);
        if correct {
            self.score += 1;
        }
        self.selected = None;
        self.current += 1;

        Ok(correct)
    }

    /// Return to the first question with no selection and a zero score.
    pub fn reset(&mut self) {
        self.current = 0;
        self.selected = None;
        self.score = 0;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("score", &self.score)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
