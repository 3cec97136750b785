#![forbid(unsafe_code)]

pub mod error;
pub mod question_bank;
pub mod quiz_loop;

pub use quiz_core::{ErrorKind, QuizError, QuizSession};

pub use error::QuestionBankError;
pub use question_bank::{DEFAULT_TITLE, QuestionBank};
pub use quiz_loop::{ListenerId, QuizLoopService, SubmitResult};
