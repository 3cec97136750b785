use std::fmt;

use tracing::{debug, info};

use quiz_core::model::{QuizProgress, QuizSnapshot};
use quiz_core::{QuizError, QuizSession};

/// Handle returned by `QuizLoopService::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&QuizSnapshot)>;

/// Result of submitting the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub correct: bool,
    pub snapshot: QuizSnapshot,
}

/// Drives a `QuizSession` on behalf of a presenter.
///
/// Every successful mutation returns the new snapshot and hands it to each subscribed
/// listener. Failed operations leave the session untouched and notify nobody.
pub struct QuizLoopService {
    session: QuizSession,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.session.current()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.session.progress()
    }

    /// Register a listener called with the new snapshot after each mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&QuizSnapshot) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// # Errors
    ///
    /// Propagates `QuizError` from `QuizSession::select_option`.
    pub fn select_option(&mut self, option: impl Into<String>) -> Result<QuizSnapshot, QuizError> {
        let option = option.into();
        self.session.select_option(option.as_str())?;
        debug!(
            question = self.session.current_index() + 1,
            option = %option,
            "option selected"
        );
        Ok(self.publish())
    }

    /// # Errors
    ///
    /// Propagates `QuizError` from `QuizSession::submit`.
    pub fn submit(&mut self) -> Result<SubmitResult, QuizError> {
        let question = self.session.current_index() + 1;
        let correct = self.session.submit()?;
        debug!(question, correct, score = self.session.score(), "answer submitted");

        if self.session.is_complete() {
            info!(
                score = self.session.score(),
                total = self.session.total_questions(),
                "quiz completed"
            );
        }

        Ok(SubmitResult {
            correct,
            snapshot: self.publish(),
        })
    }

    pub fn reset(&mut self) -> QuizSnapshot {
        let abandoned = !self.session.is_complete() && self.session.current_index() > 0;
        self.session.reset();
        info!(abandoned, "quiz restarted");
        self.publish()
    }

    fn publish(&mut self) -> QuizSnapshot {
        let snapshot = self.session.current();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
        snapshot
    }
}

impl fmt::Debug for QuizLoopService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizLoopService")
            .field("session", &self.session)
            .field("listeners_len", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
