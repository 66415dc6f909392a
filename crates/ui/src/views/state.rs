use quiz_core::model::LoadFailure;

/// Load failures as the player sees them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SourceUnavailable,
    NoQuestions,
}

impl ViewError {
    #[must_use]
    pub fn from_failure(failure: LoadFailure) -> Self {
        match failure {
            LoadFailure::Unavailable => ViewError::SourceUnavailable,
            LoadFailure::Empty => ViewError::NoQuestions,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SourceUnavailable => "Failed to load questions.json",
            ViewError::NoQuestions => "No questions found.",
        }
    }
}
