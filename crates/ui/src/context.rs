use std::sync::Arc;

use services::QuestionBank;

use crate::views::ViewError;
use crate::vm::{QuizVm, start_quiz};

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn question_bank(&self) -> Arc<QuestionBank>;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    question_bank: Arc<QuestionBank>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            question_bank: app.question_bank(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Each call starts an independent session; the caller owns it.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::EmptyQuiz` if the bank cannot start a session.
    pub fn start_quiz(&self) -> Result<QuizVm, ViewError> {
        start_quiz(&self.question_bank)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
