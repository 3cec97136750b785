use quiz_core::model::{QuizProgress, QuizSnapshot};
use services::{ErrorKind, QuestionBank, QuizError, QuizLoopService};
use tracing::warn;

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionScreenVm {
    pub heading: String,
    pub progress_label: String,
    /// Share of questions already submitted, 0..=100.
    pub progress_percent: usize,
    pub options: Vec<OptionVm>,
    pub can_submit: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultScreenVm {
    pub score: usize,
    pub total: usize,
    pub score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Question(QuestionScreenVm),
    Result(ResultScreenVm),
}

/// Gestures the quiz screen forwards to the presenter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Submit,
    Restart,
}

#[must_use]
pub fn map_quiz_screen(snapshot: &QuizSnapshot, progress: &QuizProgress) -> QuizScreenVm {
    match snapshot {
        QuizSnapshot::InProgress {
            question,
            selected_option,
            question_number,
            ..
        } => {
            let options = question
                .options()
                .iter()
                .map(|option| OptionVm {
                    label: option.clone(),
                    selected: selected_option.as_deref() == Some(option.as_str()),
                })
                .collect();
            QuizScreenVm::Question(QuestionScreenVm {
                heading: format!("Question {question_number}: {}", question.text()),
                progress_label: format!("{} of {} answered", progress.answered, progress.total),
                progress_percent: (progress.answered * 100)
                    .checked_div(progress.total)
                    .unwrap_or(0),
                options,
                can_submit: snapshot.can_submit(),
            })
        }
        QuizSnapshot::Complete {
            score,
            total_questions,
        } => QuizScreenVm::Result(ResultScreenVm {
            score: *score,
            total: *total_questions,
            score_label: format!("Your score is: {score}/{total_questions}"),
        }),
    }
}

fn view_error(err: &QuizError) -> ViewError {
    warn!(error = %err, "quiz action rejected");
    match err {
        QuizError::NoSelection => ViewError::NothingSelected,
        _ if err.kind() == ErrorKind::InvalidArgument => ViewError::InvalidAnswer,
        _ => ViewError::Unknown,
    }
}

/// Presenter-side owner of the running quiz.
pub struct QuizVm {
    quiz: QuizLoopService,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: QuizLoopService) -> Self {
        Self { quiz }
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        map_quiz_screen(&self.quiz.snapshot(), &self.quiz.progress())
    }

    /// # Errors
    ///
    /// Returns `ViewError::InvalidAnswer` if the option is not offered.
    /// Returns `ViewError::Unknown` once the quiz is complete.
    pub fn select(&mut self, option: &str) -> Result<(), ViewError> {
        self.quiz
            .select_option(option)
            .map(|_| ())
            .map_err(|err| view_error(&err))
    }

    /// # Errors
    ///
    /// Returns `ViewError::NothingSelected` if no option is selected.
    /// Returns `ViewError::Unknown` once the quiz is complete.
    pub fn submit(&mut self) -> Result<(), ViewError> {
        self.quiz
            .submit()
            .map(|_| ())
            .map_err(|err| view_error(&err))
    }

    pub fn restart(&mut self) {
        self.quiz.reset();
    }

    /// # Errors
    ///
    /// As `select` or `submit`, depending on the intent. Restarting never fails.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        match intent {
            QuizIntent::Select(option) => self.select(&option),
            QuizIntent::Submit => self.submit(),
            QuizIntent::Restart => {
                self.restart();
                Ok(())
            }
        }
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyQuiz` when the bank cannot start a session.
pub fn start_quiz(bank: &QuestionBank) -> Result<QuizVm, ViewError> {
    let session = bank.start_session().map_err(|err| {
        warn!(error = %err, "failed to start quiz");
        ViewError::EmptyQuiz
    })?;
    Ok(QuizVm::new(QuizLoopService::new(session)))
}
