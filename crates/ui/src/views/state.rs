#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyQuiz,
    NothingSelected,
    InvalidAnswer,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyQuiz => "There are no questions to show.",
            Self::NothingSelected => "Pick an answer before submitting.",
            Self::InvalidAnswer => "That answer is not one of the options.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}
