use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("Media locator cannot be empty.")]
    EmptyLocator,

    #[error("Media locator {locator:?} cannot be resolved against {base}.")]
    Unresolvable { locator: String, base: String },
}

//
// ─── MEDIA CORE TYPES ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Maps a question-list `type` tag. Only `"video"` selects video playback;
    /// every other tag is rendered as an image.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == "video" {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Locator of a media asset as written in the question list.
///
/// Relative locators are resolved against the page (or question file) that
/// listed them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn new(raw: impl Into<String>) -> Result<Self, MediaValidationError> {
        let s = raw.into();
        if s.trim().is_empty() {
            return Err(MediaValidationError::EmptyLocator);
        }
        Ok(Self(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the locator against `base`. Absolute locators are returned as-is.
    pub fn resolve(&self, base: &Url) -> Result<Url, MediaValidationError> {
        base.join(self.0.trim())
            .map_err(|_| MediaValidationError::Unresolvable {
                locator: self.0.clone(),
                base: base.to_string(),
            })
    }
}

//
// ─── VALIDATED DOMAIN ENTITY ───────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    kind: MediaKind,
    locator: MediaRef,
}

impl Media {
    #[must_use]
    pub fn new(kind: MediaKind, locator: MediaRef) -> Self {
        Self { kind, locator }
    }

    #[must_use]
    pub fn image(locator: MediaRef) -> Self {
        Self::new(MediaKind::Image, locator)
    }

    #[must_use]
    pub fn video(locator: MediaRef) -> Self {
        Self::new(MediaKind::Video, locator)
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    #[must_use]
    pub fn locator(&self) -> &MediaRef {
        &self.locator
    }

    /// Replace the locator with its resolved absolute form.
    ///
    /// # Errors
    ///
    /// Returns `MediaValidationError::Unresolvable` if the join fails.
    pub fn resolved_against(self, base: &Url) -> Result<Self, MediaValidationError> {
        let url = self.locator.resolve(base)?;
        Ok(Self {
            kind: self.kind,
            locator: MediaRef(url.to_string()),
        })
    }

    /// Rewrite an absolute locator that lies under `root` as a path relative
    /// to it. Locators elsewhere are left alone.
    #[must_use]
    pub fn relative_within(self, root: &Url) -> Self {
        let relative = Url::parse(self.locator.as_str())
            .ok()
            .filter(|url| url.as_str().starts_with(root.as_str()))
            .and_then(|url| root.make_relative(&url))
            .filter(|path| !path.is_empty());
        match relative {
            Some(path) => Self {
                kind: self.kind,
                locator: MediaRef(path),
            },
            None => self,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
