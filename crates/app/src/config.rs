use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quiz_source::{FileSource, HttpSource, QuestionSource};
use services::ShuffleMode;
use url::Url;

pub const DEFAULT_QUESTIONS: &str = "questions.json";

#[derive(Debug)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestions { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestions { raw } => write!(f, "invalid --questions value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

/// Where the question list lives: a local file or an `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsLocation {
    File(PathBuf),
    Remote(Url),
}

impl QuestionsLocation {
    pub fn parse(raw: &str) -> Result<Self, ArgsError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ArgsError::InvalidQuestions {
                raw: raw.to_string(),
            });
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed).map_err(|_| ArgsError::InvalidQuestions {
                raw: raw.to_string(),
            })?;
            return Ok(Self::Remote(url));
        }
        Ok(Self::File(PathBuf::from(trimmed)))
    }

    pub fn into_source(self) -> Arc<dyn QuestionSource> {
        match self {
            Self::File(path) => {
                let layout = std::env::current_dir()
                    .ok()
                    .and_then(|cwd| media_layout(&path, &cwd));
                let source = FileSource::new(path);
                match layout {
                    Some(MediaLayout { base, root }) => {
                        if !base.as_str().starts_with(root.as_str()) {
                            tracing::warn!(
                                %base,
                                "media outside the working directory are linked as file:// URLs \
                                 and may not load in the desktop window"
                            );
                        }
                        Arc::new(source.with_media_base(base).with_serve_root(root))
                    }
                    None => Arc::new(source),
                }
            }
            Self::Remote(url) => Arc::new(HttpSource::new(url)),
        }
    }
}

/// How media locators of a local question file are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MediaLayout {
    /// Directory of the question file.
    base: Url,
    /// Working directory, which the desktop webview serves.
    root: Url,
}

// Media next to a question file in the working directory resolve on their own.
fn media_layout(path: &Path, cwd: &Path) -> Option<MediaLayout> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty())?;
    let base = Url::from_directory_path(cwd.join(parent)).ok()?;
    let root = Url::from_directory_path(cwd).ok()?;
    Some(MediaLayout { base, root })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub questions: QuestionsLocation,
    pub shuffle: ShuffleMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Config),
    Help,
}

fn shuffle_from_env(value: &str) -> ShuffleMode {
    match value.trim().to_ascii_lowercase().as_str() {
        "0" | "false" | "off" | "no" => ShuffleMode::Off,
        _ => ShuffleMode::Random,
    }
}

impl Config {
    /// Parse command-line flags on top of environment defaults.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut questions = match env("QUIZ_QUESTIONS") {
            Some(raw) => QuestionsLocation::parse(&raw)?,
            None => QuestionsLocation::File(PathBuf::from(DEFAULT_QUESTIONS)),
        };
        let mut shuffle = env("QUIZ_SHUFFLE").map_or(ShuffleMode::Random, |v| shuffle_from_env(&v));

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(&mut args, "--questions")?;
                    questions = QuestionsLocation::parse(&value)?;
                }
                "--no-shuffle" => shuffle = ShuffleMode::Off,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { questions, shuffle }))
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path|url>] [--no-shuffle]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {DEFAULT_QUESTIONS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_SHUFFLE=0, RUST_LOG");
}
