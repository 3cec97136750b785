mod question;
mod snapshot;

pub use question::{Question, QuestionDraft, QuestionError};
pub use snapshot::{QuizProgress, QuizSnapshot};
