use async_trait::async_trait;
use quiz_core::model::Question;
use url::Url;

use crate::record::parse_question_list;
use crate::source::{QuestionSource, SourceError};

/// Question list served over HTTP, e.g. `questions.json` next to the page.
///
/// Media locators are resolved against the list's own URL, which matches how a
/// browser resolves them against the hosting page.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Build a source for `file` relative to `page`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the two cannot be joined.
    pub fn relative_to(page: &Url, file: &str) -> Result<Self, SourceError> {
        let url = page
            .join(file)
            .map_err(|err| SourceError::Unavailable(format!("{file}: {err}")))?;
        Ok(Self::new(url))
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl QuestionSource for HttpSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, SourceError> {
        tracing::debug!(url = %self.url, "fetching question list");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| SourceError::Unavailable(err.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|err| SourceError::Unavailable(err.to_string()))?;

        parse_question_list(&body)?
            .into_iter()
            .map(|q| {
                q.resolve_media(&self.url)
                    .map_err(|err| SourceError::Malformed(err.to_string()))
            })
            .collect()
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
