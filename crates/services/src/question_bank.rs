use std::path::Path;

use serde::Deserialize;
use tracing::info;

use quiz_core::QuizSession;
use quiz_core::model::{Question, QuestionDraft};

use crate::error::QuestionBankError;

/// Title used when a bank does not name itself.
pub const DEFAULT_TITLE: &str = "Quiz App";

/// Text, options and correct answer of a question compiled into the binary.
type BankEntry = (&'static str, &'static [&'static str], &'static str);

const BUILTIN_QUESTIONS: &[BankEntry] = &[
    ("What is 2 + 2?", &["3", "4", "5", "6"], "4"),
    ("What is 5 * 6?", &["30", "32", "28", "36"], "30"),
    ("What is 10 / 2?", &["3", "4", "5", "6"], "5"),
    ("What is 9 - 3?", &["5", "6", "7", "8"], "6"),
    ("What is 7 + 8?", &["14", "15", "16", "17"], "15"),
];

/// On-disk shape of a question bank. A bare array of questions is also accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum BankFile {
    Titled {
        #[serde(default)]
        title: Option<String>,
        questions: Vec<QuestionDraft>,
    },
    Bare(Vec<QuestionDraft>),
}

/// Validate every draft, reporting the index of the first one that fails.
fn validate_drafts(drafts: Vec<QuestionDraft>) -> Result<Vec<Question>, QuestionBankError> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate()
                .map_err(|source| QuestionBankError::InvalidQuestion { index, source })
        })
        .collect()
}

/// A validated, non-empty, ordered list of questions that sessions are started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    title: String,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `QuestionBankError::Empty` if `questions` is empty.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        Ok(Self {
            title: title.into(),
            questions,
        })
    }

    /// The five arithmetic questions shipped with the app.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::InvalidQuestion` if a built-in entry breaks a question invariant.
    pub fn builtin() -> Result<Self, QuestionBankError> {
        Self::from_entries(DEFAULT_TITLE, BUILTIN_QUESTIONS)
    }

    fn from_entries(title: &str, entries: &[BankEntry]) -> Result<Self, QuestionBankError> {
        let drafts = entries
            .iter()
            .map(|(text, options, answer)| QuestionDraft {
                text: (*text).to_string(),
                options: options.iter().map(|option| (*option).to_string()).collect(),
                correct_answer: (*answer).to_string(),
            })
            .collect();
        Self::new(title, validate_drafts(drafts)?)
    }

    /// Parse a bank from JSON.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Parse` for malformed JSON.
    /// Returns `QuestionBankError::InvalidQuestion` for the first question that fails validation.
    /// Returns `QuestionBankError::Empty` if the bank has no questions.
    pub fn from_json_str(raw: &str) -> Result<Self, QuestionBankError> {
        let (title, drafts) = match serde_json::from_str::<BankFile>(raw)? {
            BankFile::Titled { title, questions } => (title, questions),
            BankFile::Bare(questions) => (None, questions),
        };

        let questions = validate_drafts(drafts)?;

        let title = title
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        Self::new(title, questions)
    }

    /// Read and parse a JSON bank from disk.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Io` if the file cannot be read, otherwise as `from_json_str`.
    pub fn from_path(path: &Path) -> Result<Self, QuestionBankError> {
        let raw = std::fs::read_to_string(path).map_err(|source| QuestionBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            questions = bank.len(),
            "loaded question bank"
        );
        Ok(bank)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Start a fresh session over a copy of the bank's questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Quiz` if the session rejects the question list.
    pub fn start_session(&self) -> Result<QuizSession, QuestionBankError> {
        Ok(QuizSession::new(self.questions.clone())?)
    }
}
