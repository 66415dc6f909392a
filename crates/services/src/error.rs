//! Shared error types for the services crate.

use thiserror::Error;

use quiz_source::SourceError;

/// Errors emitted while loading a quiz.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Source(#[from] SourceError),
}
