use thiserror::Error;

use crate::model::media::{Media, MediaKind, MediaRef, MediaValidationError};

/// Fewest options a multiple-choice question can offer.
pub const MIN_OPTIONS: usize = 2;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question fields as read from a question source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub kind: MediaKind,
    pub locator: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuestionDraft {
    /// # Errors
    ///
    /// Returns `QuestionError` if the locator is empty, fewer than two options
    /// are given, or the correct index does not point at an option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let locator = MediaRef::new(self.locator)?;

        if self.options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                count: self.options.len(),
            });
        }

        if self.correct_index >= self.options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: self.correct_index,
                options: self.options.len(),
            });
        }

        Ok(Question {
            media: Media::new(self.kind, locator),
            options: self.options,
            correct_index: self.correct_index,
        })
    }
}

/// One quiz item: a media asset, its answer options and the correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    media: Media,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    #[must_use]
    pub fn media(&self) -> &Media {
        &self.media
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }

    /// Resolve the media locator against the location of the question list.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidMedia` if the locator cannot be joined.
    pub fn resolve_media(self, base: &url::Url) -> Result<Self, QuestionError> {
        Ok(Self {
            media: self.media.resolved_against(base)?,
            ..self
        })
    }

    /// See [`Media::relative_within`].
    #[must_use]
    pub fn relative_media_within(self, root: &url::Url) -> Self {
        Self {
            media: self.media.relative_within(root),
            ..self
        }
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("invalid media: {0}")]
    InvalidMedia(#[from] MediaValidationError),

    #[error("a question needs at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct index {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
