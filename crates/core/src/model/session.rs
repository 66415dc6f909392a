use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,

    #[error("session already completed")]
    Completed,

    #[error("current question was already answered")]
    AlreadyAnswered,

    #[error("current question has not been answered yet")]
    NotAnswered,

    #[error("option {index} does not exist (question has {options} options)")]
    OptionOutOfRange { index: usize, options: usize },
}

/// The answer given for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedAnswer {
    pub selected: usize,
    pub correct: usize,
}

impl SubmittedAnswer {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected == self.correct
    }
}

/// Where an advance left the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { position: usize },
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a shuffled question list.
///
/// Steps through the questions in order. Each question accepts exactly one
/// answer, and the session only moves on once that answer is in.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    questions: Vec<Question>,
    position: usize,
    score: usize,
    answer: Option<SubmittedAnswer>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            position: 0,
            score: 0,
            answer: None,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Answer given for the current question, if any.
    #[must_use]
    pub fn answer(&self) -> Option<SubmittedAnswer> {
        self.answer
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            return None;
        }
        self.questions.get(self.position)
    }

    /// Progress through the quiz in percent, counting the question on screen.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f32 {
        if self.is_complete() {
            return 100.0;
        }
        (self.position + 1) as f32 / self.total() as f32 * 100.0
    }

    /// Record an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished,
    /// `SessionError::AlreadyAnswered` on a second answer for the same question,
    /// and `SessionError::OptionOutOfRange` for an index the question does not offer.
    pub fn answer_current(&mut self, selected: usize) -> Result<SubmittedAnswer, SessionError> {
        let Some(question) = self.current_question() else {
            return Err(SessionError::Completed);
        };
        if self.answer.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }
        if selected >= question.option_count() {
            return Err(SessionError::OptionOutOfRange {
                index: selected,
                options: question.option_count(),
            });
        }

        let answer = SubmittedAnswer {
            selected,
            correct: question.correct_index(),
        };
        if answer.is_correct() {
            self.score += 1;
        }
        self.answer = Some(answer);
        Ok(answer)
    }

    /// Move past the answered question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished and
    /// `SessionError::NotAnswered` while the current question is still open.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<Advance, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.answer.is_none() {
            return Err(SessionError::NotAnswered);
        }

        self.answer = None;
        self.position += 1;
        if self.position >= self.questions.len() {
            self.completed_at = Some(at);
            return Ok(Advance::Finished);
        }
        Ok(Advance::Next {
            position: self.position,
        })
    }

    /// Final tally, available once the last question has been passed.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.completed_at.map(|completed_at| SessionSummary {
            score: self.score,
            total: self.total(),
            started_at: self.started_at,
            completed_at,
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("questions_len", &self.questions.len())
            .field("position", &self.position)
            .field("score", &self.score)
            .field("answer", &self.answer)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish()
    }
}

/// Aggregate result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: usize,
    pub total: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl SessionSummary {
    #[must_use]
    pub fn elapsed(&self) -> chrono::Duration {
        self.completed_at - self.started_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
