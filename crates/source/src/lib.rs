#![forbid(unsafe_code)]

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod http;
pub mod record;
pub mod source;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSource;
pub use http::HttpSource;
pub use record::{QuestionRecord, parse_question_list};
pub use source::{InMemorySource, QuestionSource, SourceError};
