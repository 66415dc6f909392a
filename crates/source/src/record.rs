use quiz_core::model::{MediaKind, Question, QuestionDraft};
use serde::{Deserialize, Serialize};

use crate::source::SourceError;

/// Wire shape of one entry in a question list.
///
/// ```json
/// { "type": "video", "file": "clips/owl.mp4", "options": ["Owl", "Hawk"], "answer": 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub file: String,
    pub options: Vec<String>,
    pub answer: usize,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        file: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: usize,
    ) -> Self {
        Self {
            kind: kind.into(),
            file: file.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer,
        }
    }

    /// Convert the record into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` (via `quiz_core::Error`) when the record breaks a
    /// question invariant.
    pub fn into_question(self) -> Result<Question, quiz_core::Error> {
        let question = QuestionDraft {
            kind: MediaKind::from_tag(&self.kind),
            locator: self.file,
            options: self.options,
            correct_index: self.answer,
        }
        .validate()?;
        Ok(question)
    }
}

/// Convert a list of records, failing the whole list on the first bad record.
///
/// # Errors
///
/// Returns `SourceError::Malformed` naming the offending record.
pub fn into_questions(records: Vec<QuestionRecord>) -> Result<Vec<Question>, SourceError> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            record
                .into_question()
                .map_err(|err| SourceError::Malformed(format!("record {idx}: {err}")))
        })
        .collect()
}

/// Parse a JSON question list.
///
/// # Errors
///
/// Returns `SourceError::Malformed` if the document is not a list of valid records.
pub fn parse_question_list(json: &str) -> Result<Vec<Question>, SourceError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(json).map_err(|err| SourceError::Malformed(err.to_string()))?;
    into_questions(records)
}
