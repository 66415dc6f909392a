mod ids;
mod media;
mod question;
mod quiz;
mod session;

pub use ids::LoadTicket;
pub use media::{Media, MediaKind, MediaRef, MediaValidationError};
pub use question::{Question, QuestionDraft, QuestionError};
pub use quiz::{LoadFailure, QuizEvent, QuizState};
pub use session::{Advance, Session, SessionError, SessionSummary, SubmittedAnswer};
