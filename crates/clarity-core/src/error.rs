//! Error types for the Clarity metrics engine.
//!
//! Extractors themselves never fail: a missing landmark set or an
//! out-of-range index is treated as "this frame does not contribute".
//! Errors occur only at the boundaries — stream assembly,
//! configuration loading, and report serialization.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("stream '{stream}' is misaligned: expected {expected} frames, got {actual}")]
    StreamMisaligned {
        stream: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
