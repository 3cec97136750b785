#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;

pub use error::{ErrorKind, QuizError};
pub use session::QuizSession;
