use quiz_core::Clock;
use quiz_core::model::{LoadTicket, Question, QuizEvent, QuizState, SubmittedAnswer};

use crate::error::QuizError;

/// Owns the quiz state and feeds it events.
///
/// The controller is the only writer of `QuizState`. Every load gets a fresh
/// ticket, so a response that arrives after a restart is recognised and dropped.
#[derive(Debug, Clone)]
pub struct QuizController {
    state: QuizState,
    last_ticket: LoadTicket,
    clock: Clock,
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new(Clock::default_clock())
    }
}

impl QuizController {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            state: QuizState::Idle,
            last_ticket: LoadTicket::new(0),
            clock,
        }
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Start a load. Returns the ticket the fetch must report back with, or
    /// `None` if the current state does not accept a load (a quiz in progress).
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        let ticket = self.last_ticket.next();
        self.transition(QuizEvent::Load { ticket });
        if self.state.is_loading() && self.state.ticket() == Some(ticket) {
            self.last_ticket = ticket;
            tracing::info!(%ticket, "loading questions");
            Some(ticket)
        } else {
            None
        }
    }

    /// Throw the current session away and load a new one.
    pub fn restart(&mut self) -> Option<LoadTicket> {
        tracing::info!(previous = ?self.state.ticket(), "restarting quiz");
        self.begin_load()
    }

    /// Apply the outcome of the fetch started for `ticket`.
    ///
    /// Returns `false` when the response belongs to a superseded load.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Question>, QuizError>,
    ) -> bool {
        if !self.state.is_loading() || self.state.ticket() != Some(ticket) {
            tracing::warn!(%ticket, current = ?self.state.ticket(), "ignoring stale question list");
            return false;
        }

        let event = match result {
            Ok(questions) => {
                if questions.is_empty() {
                    tracing::warn!(%ticket, "question list is empty");
                }
                QuizEvent::Loaded {
                    ticket,
                    questions,
                    at: self.clock.now(),
                }
            }
            Err(err) => {
                tracing::error!(%ticket, error = %err, "failed to load questions");
                QuizEvent::LoadFailed { ticket }
            }
        };
        self.transition(event);
        true
    }

    /// Submit an answer for the current question.
    ///
    /// Returns the recorded answer, or `None` if the pick was ignored (no quiz
    /// running, question already answered, or index out of range).
    pub fn select(&mut self, index: usize) -> Option<SubmittedAnswer> {
        let already_answered = self
            .state
            .session()
            .is_none_or(|session| session.answer().is_some());
        self.transition(QuizEvent::Select(index));
        if already_answered {
            return None;
        }

        let answer = self.state.session().and_then(|session| session.answer())?;
        if let Some(session) = self.state.session() {
            tracing::debug!(
                position = session.position(),
                selected = answer.selected,
                correct = answer.is_correct(),
                score = session.score(),
                "answer submitted"
            );
        }
        Some(answer)
    }

    /// Move to the next question, or to the scoreboard after the last one.
    pub fn advance(&mut self) {
        let at = self.clock.now();
        self.transition(QuizEvent::Advance { at });
        if let QuizState::Finished { session, .. } = &self.state {
            tracing::info!(score = session.score(), total = session.total(), "quiz finished");
        }
    }

    fn transition(&mut self, event: QuizEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }
}
