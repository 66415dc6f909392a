use std::sync::Arc;

use quiz_core::model::Question;
use quiz_source::QuestionSource;

use super::shuffle::ShuffleMode;
use crate::error::QuizError;

/// Fetches question lists and prepares them for a new session.
#[derive(Clone)]
pub struct QuizService {
    source: Arc<dyn QuestionSource>,
    shuffle: ShuffleMode,
}

impl QuizService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            shuffle: ShuffleMode::default(),
        }
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn shuffle(&self) -> ShuffleMode {
        self.shuffle
    }

    /// Fetch the question list and shuffle it once.
    ///
    /// An empty list is returned as-is; the quiz state decides how to present it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Source` if the source is unavailable or malformed.
    pub async fn fetch_questions(&self) -> Result<Vec<Question>, QuizError> {
        let mut questions = self.source.fetch_questions().await?;
        self.shuffle.apply(&mut questions);
        tracing::debug!(
            source = %self.source.describe(),
            count = questions.len(),
            "question list fetched"
        );
        Ok(questions)
    }
}
