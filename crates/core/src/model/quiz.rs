//! Quiz lifecycle as a pure state machine.
//!
//! ```text
//! Idle ──Load──▶ Loading ──Loaded──▶ Playing ──Advance (last)──▶ Finished
//!                   │                  ▲  │                          │
//!                   │                  └──┘ Select / Advance          │
//!                   └──LoadFailed / Loaded([])──▶ Failed              │
//!      Finished / Failed ──Load──▶ Loading ◀──────────────────────────┘
//! ```
//!
//! `QuizState::apply` never panics and never errors: events that make no sense
//! in the current state leave it untouched.

use chrono::{DateTime, Utc};

use crate::model::{LoadTicket, Question, Session, SessionError};

/// Why a load ended without a playable session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// The source could not be reached or returned an unusable payload.
    Unavailable,
    /// The source returned no questions.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// A fetch was started for `ticket` (initial load or restart).
    Load { ticket: LoadTicket },
    /// The fetch for `ticket` returned these (already shuffled) questions.
    Loaded {
        ticket: LoadTicket,
        questions: Vec<Question>,
        at: DateTime<Utc>,
    },
    /// The fetch for `ticket` failed.
    LoadFailed { ticket: LoadTicket },
    /// The player picked an option of the current question.
    Select(usize),
    /// The player asked for the next question.
    Advance { at: DateTime<Utc> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    Idle,
    Loading {
        ticket: LoadTicket,
    },
    Playing {
        ticket: LoadTicket,
        session: Session,
    },
    Finished {
        ticket: LoadTicket,
        session: Session,
    },
    Failed {
        ticket: LoadTicket,
        failure: LoadFailure,
    },
}

impl QuizState {
    /// Compute the state that follows `event`.
    #[must_use]
    pub fn apply(self, event: QuizEvent) -> Self {
        match (self, event) {
            (state, QuizEvent::Load { ticket }) => match state.ticket() {
                Some(current) if ticket <= current => state,
                _ if matches!(state, QuizState::Playing { .. }) => state,
                _ => QuizState::Loading { ticket },
            },

            (QuizState::Loading { ticket }, QuizEvent::Loaded { ticket: t, questions, at })
                if t == ticket =>
            {
                match Session::new(questions, at) {
                    Ok(session) => QuizState::Playing { ticket, session },
                    Err(_) => QuizState::Failed {
                        ticket,
                        failure: LoadFailure::Empty,
                    },
                }
            }

            (QuizState::Loading { ticket }, QuizEvent::LoadFailed { ticket: t }) if t == ticket => {
                QuizState::Failed {
                    ticket,
                    failure: LoadFailure::Unavailable,
                }
            }

            (QuizState::Playing { ticket, mut session }, QuizEvent::Select(index)) => {
                match session.answer_current(index) {
                    Ok(_) => {}
                    // Repeated and out-of-range picks leave the session as it was.
                    Err(SessionError::AlreadyAnswered | SessionError::OptionOutOfRange { .. }) => {}
                    // A playing session always has a current question.
                    Err(SessionError::Empty | SessionError::Completed | SessionError::NotAnswered) => {}
                }
                QuizState::Playing { ticket, session }
            }

            (QuizState::Playing { ticket, mut session }, QuizEvent::Advance { at }) => {
                match session.advance(at) {
                    Ok(_) => {}
                    // Advancing waits for an answer.
                    Err(SessionError::NotAnswered) => {}
                    Err(
                        SessionError::Empty
                        | SessionError::Completed
                        | SessionError::AlreadyAnswered
                        | SessionError::OptionOutOfRange { .. },
                    ) => {}
                }
                if session.is_complete() {
                    QuizState::Finished { ticket, session }
                } else {
                    QuizState::Playing { ticket, session }
                }
            }

            (state, _) => state,
        }
    }

    /// Ticket of the load this state belongs to.
    #[must_use]
    pub fn ticket(&self) -> Option<LoadTicket> {
        match self {
            QuizState::Idle => None,
            QuizState::Loading { ticket }
            | QuizState::Playing { ticket, .. }
            | QuizState::Finished { ticket, .. }
            | QuizState::Failed { ticket, .. } => Some(*ticket),
        }
    }

    /// The session being played or just finished.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            QuizState::Playing { session, .. } | QuizState::Finished { session, .. } => {
                Some(session)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, QuizState::Loading { .. })
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, QuizState::Finished { .. })
    }

    #[must_use]
    pub fn failure(&self) -> Option<LoadFailure> {
        match self {
            QuizState::Failed { failure, .. } => Some(*failure),
            _ => None,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaKind, QuestionDraft};
    use crate::time::fixed_now;

    fn question(correct_index: usize) -> Question {
        QuestionDraft {
            kind: MediaKind::Video,
            locator: "clip.mp4".into(),
            options: vec!["A".into(), "B".into(), "C".into()],
            correct_index,
        }
        .validate()
        .unwrap()
    }

    fn loaded(ticket: u64, correct: &[usize]) -> QuizEvent {
        QuizEvent::Loaded {
            ticket: LoadTicket::new(ticket),
            questions: correct.iter().map(|c| question(*c)).collect(),
            at: fixed_now(),
        }
    }

    fn load(ticket: u64) -> QuizEvent {
        QuizEvent::Load {
            ticket: LoadTicket::new(ticket),
        }
    }

    fn advance() -> QuizEvent {
        QuizEvent::Advance { at: fixed_now() }
    }

    fn playing(correct: &[usize]) -> QuizState {
        QuizState::Idle.apply(load(1)).apply(loaded(1, correct))
    }

    #[test]
    fn load_then_loaded_starts_playing_at_zero() {
        let state = playing(&[0, 1]);
        let session = state.session().unwrap();
        assert!(matches!(state, QuizState::Playing { .. }));
        assert_eq!(session.position(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn empty_result_fails_with_empty() {
        let state = QuizState::Idle.apply(load(1)).apply(loaded(1, &[]));
        assert_eq!(state.failure(), Some(LoadFailure::Empty));
        assert!(state.session().is_none());
    }

    #[test]
    fn fetch_failure_fails_with_unavailable() {
        let state = QuizState::Idle.apply(load(1)).apply(QuizEvent::LoadFailed {
            ticket: LoadTicket::new(1),
        });
        assert_eq!(state.failure(), Some(LoadFailure::Unavailable));
    }

    #[test]
    fn stale_responses_are_ignored() {
        let state = QuizState::Idle.apply(load(1)).apply(load(2));
        let state = state.apply(loaded(1, &[0]));
        assert_eq!(state, QuizState::Loading { ticket: LoadTicket::new(2) });

        let state = state.apply(QuizEvent::LoadFailed {
            ticket: LoadTicket::new(1),
        });
        assert!(state.is_loading());

        let state = state.apply(loaded(2, &[0, 1]));
        assert_eq!(state.session().unwrap().total(), 2);
    }

    #[test]
    fn late_response_after_restart_does_not_replace_fresh_session() {
        let state = playing(&[0]).apply(QuizEvent::Select(0)).apply(advance());
        assert!(state.is_finished());

        let state = state.apply(load(2)).apply(loaded(2, &[1, 1]));
        let state = state.apply(loaded(1, &[0, 0, 0, 0]));
        assert_eq!(state.ticket(), Some(LoadTicket::new(2)));
        assert_eq!(state.session().unwrap().total(), 2);
    }

    #[test]
    fn older_ticket_cannot_restart_loading() {
        let state = QuizState::Idle.apply(load(3)).apply(load(2));
        assert_eq!(state.ticket(), Some(LoadTicket::new(3)));
    }

    #[test]
    fn load_is_ignored_while_playing() {
        let state = playing(&[0, 1]).apply(load(5));
        assert!(matches!(state, QuizState::Playing { .. }));
    }

    #[test]
    fn double_submission_counts_once() {
        let state = playing(&[1, 0])
            .apply(QuizEvent::Select(1))
            .apply(QuizEvent::Select(1));
        assert_eq!(state.session().unwrap().score(), 1);
    }

    #[test]
    fn advance_before_answer_is_ignored() {
        let state = playing(&[1, 0]).apply(advance());
        assert_eq!(state.session().unwrap().position(), 0);
    }

    #[test]
    fn rejected_picks_and_early_advance_keep_state_identical() {
        let fresh = playing(&[1, 0]);
        assert_eq!(fresh.clone().apply(advance()), fresh);
        assert_eq!(fresh.clone().apply(QuizEvent::Select(3)), fresh);

        let answered = fresh.apply(QuizEvent::Select(0));
        assert_eq!(answered.clone().apply(QuizEvent::Select(1)), answered);
        assert_eq!(answered.clone().apply(QuizEvent::Select(7)), answered);
        let answer = answered.session().unwrap().answer().unwrap();
        assert_eq!((answer.selected, answer.correct), (0, 1));
    }

    #[test]
    fn scenario_two_of_three() {
        let mut state = playing(&[1, 0, 2]);
        for pick in [1, 0, 0] {
            state = state.apply(QuizEvent::Select(pick)).apply(advance());
        }
        assert!(state.is_finished());
        let session = state.session().unwrap();
        assert_eq!(session.score(), 2);
        assert_eq!(session.position(), session.total());
    }

    #[test]
    fn restart_from_finished_and_failed() {
        let finished = playing(&[0]).apply(QuizEvent::Select(0)).apply(advance());
        assert!(finished.apply(load(2)).is_loading());

        let failed = QuizState::Idle.apply(load(1)).apply(loaded(1, &[]));
        assert!(failed.apply(load(2)).is_loading());
    }

    #[test]
    fn events_outside_playing_leave_state_untouched() {
        let idle = QuizState::Idle;
        assert_eq!(idle.clone().apply(QuizEvent::Select(0)), idle);
        assert_eq!(idle.clone().apply(advance()), idle);

        let finished = playing(&[0]).apply(QuizEvent::Select(0)).apply(advance());
        assert_eq!(finished.clone().apply(QuizEvent::Select(0)), finished);
        assert_eq!(finished.clone().apply(advance()), finished);
    }
}
