use async_trait::async_trait;
use quiz_core::model::Question;
use std::sync::Arc;
use thiserror::Error;

use crate::record::{QuestionRecord, into_questions};

/// Errors surfaced by question sources.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceError {
    #[error("question list unavailable: {0}")]
    Unavailable(String),

    #[error("question list is malformed: {0}")]
    Malformed(String),
}

/// Something that can hand out the ordered question list.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait QuestionSource: Send + Sync {
    /// Fetch the full question list in source order.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the list cannot be read and
    /// `SourceError::Malformed` if it cannot be decoded.
    async fn fetch_questions(&self) -> Result<Vec<Question>, SourceError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Fixed question list for tests and demos.
#[derive(Clone, Default)]
pub struct InMemorySource {
    records: Arc<Vec<QuestionRecord>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl QuestionSource for InMemorySource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, SourceError> {
        into_questions(self.records.as_ref().clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }
}
