use thiserror::Error;

use crate::model::{MediaValidationError, QuestionError, SessionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MediaValidation(#[from] MediaValidationError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
