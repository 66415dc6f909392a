use async_trait::async_trait;
use quiz_core::model::Question;
use std::path::PathBuf;
use url::Url;

use crate::record::parse_question_list;
use crate::source::{QuestionSource, SourceError};

/// Question list stored as a JSON file on disk.
///
/// Media locators are left as written unless a media base is configured.
/// With a serve root as well, resolved locators under that root are turned
/// back into paths relative to it, which is how a desktop webview serving
/// the working directory can load them.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    media_base: Option<Url>,
    serve_root: Option<Url>,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            media_base: None,
            serve_root: None,
        }
    }

    /// Resolve relative media locators against `base`.
    #[must_use]
    pub fn with_media_base(mut self, base: Url) -> Self {
        self.media_base = Some(base);
        self
    }

    /// Directory the page serves files from.
    #[must_use]
    pub fn with_serve_root(mut self, root: Url) -> Self {
        self.serve_root = Some(root);
        self
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, SourceError> {
        tracing::debug!(path = %self.path.display(), "reading question list");
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| SourceError::Unavailable(format!("{}: {err}", self.path.display())))?;
        let questions = parse_question_list(&raw)?;

        let Some(base) = self.media_base.as_ref() else {
            return Ok(questions);
        };
        questions
            .into_iter()
            .map(|q| -> Result<Question, SourceError> {
                let q = q
                    .resolve_media(base)
                    .map_err(|err| SourceError::Malformed(err.to_string()))?;
                Ok(match self.serve_root.as_ref() {
                    Some(root) => q.relative_media_within(root),
                    None => q,
                })
            })
            .collect()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
