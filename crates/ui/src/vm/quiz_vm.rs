use quiz_core::model::{LoadTicket, MediaKind, QuizState, Session};

use crate::views::ViewError;

pub const CORRECT_FEEDBACK: &str = "🎉 Correct!";
pub const WRONG_FEEDBACK: &str = "❌ Wrong!";

/// Identifies the media element of one question in one load, so a load
/// failure flag never leaks into the next question or the next run.
pub type MediaKey = (LoadTicket, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStatus {
    Idle,
    Correct,
    Wrong,
}

impl OptionStatus {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionStatus::Idle => "option-btn",
            OptionStatus::Correct => "option-btn correct",
            OptionStatus::Wrong => "option-btn wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub status: OptionStatus,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaVm {
    pub kind: MediaKind,
    pub src: String,
}

impl MediaVm {
    #[must_use]
    pub fn not_found_message(&self) -> &'static str {
        match self.kind {
            MediaKind::Image => "Image not found",
            MediaKind::Video => "Video not found",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub key: MediaKey,
    pub media: MediaVm,
    pub options: Vec<OptionVm>,
    pub feedback: Option<&'static str>,
    pub show_next: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreboardVm {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuizBody {
    Loading,
    Failed(ViewError),
    Question(QuestionVm),
    Scoreboard(ScoreboardVm),
}

/// Everything the quiz page renders, derived from the quiz state alone.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizScreenVm {
    pub score_label: String,
    pub progress_percent: f32,
    pub body: QuizBody,
}

#[must_use]
pub fn final_score_message(score: usize, total: usize) -> String {
    format!("You scored {score} out of {total}!")
}

#[must_use]
pub fn progress_style(percent: f32) -> String {
    format!("width: {percent}%")
}

fn score_label(score: usize) -> String {
    format!("Score: {score}")
}

#[must_use]
pub fn map_quiz_screen(state: &QuizState) -> QuizScreenVm {
    match state {
        QuizState::Idle | QuizState::Loading { .. } => QuizScreenVm {
            score_label: score_label(0),
            progress_percent: 0.0,
            body: QuizBody::Loading,
        },
        QuizState::Failed { failure, .. } => QuizScreenVm {
            score_label: score_label(0),
            progress_percent: 0.0,
            body: QuizBody::Failed(ViewError::from_failure(*failure)),
        },
        QuizState::Playing { ticket, session } => QuizScreenVm {
            score_label: score_label(session.score()),
            progress_percent: session.progress_percent(),
            body: map_question(*ticket, session).map_or(QuizBody::Loading, QuizBody::Question),
        },
        QuizState::Finished { session, .. } => QuizScreenVm {
            score_label: score_label(session.score()),
            progress_percent: 100.0,
            body: QuizBody::Scoreboard(ScoreboardVm {
                message: final_score_message(session.score(), session.total()),
            }),
        },
    }
}

fn map_question(ticket: LoadTicket, session: &Session) -> Option<QuestionVm> {
    let question = session.current_question()?;
    let answer = session.answer();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let status = match answer {
                Some(a) if index == a.correct => OptionStatus::Correct,
                Some(a) if index == a.selected => OptionStatus::Wrong,
                _ => OptionStatus::Idle,
            };
            OptionVm {
                index,
                label: label.clone(),
                status,
                disabled: answer.is_some(),
            }
        })
        .collect();

    Some(QuestionVm {
        key: (ticket, session.position()),
        media: MediaVm {
            kind: question.media().kind(),
            src: question.media().locator().as_str().to_string(),
        },
        options,
        feedback: answer.map(|a| {
            if a.is_correct() {
                CORRECT_FEEDBACK
            } else {
                WRONG_FEEDBACK
            }
        }),
        show_next: answer.is_some(),
    })
}
