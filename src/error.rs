//! Error types for the `tracetab` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur in `tracetab`.
///
/// Maps to exit codes: [`Config`](Self::Config) → exit 1,
/// [`Io`](Self::Io) → exit 2. [`Decode`](Self::Decode) is never fatal:
/// it is reported once per offending line and the stream continues.
#[derive(Debug, Error)]
pub enum TraceTabError {
    /// Configuration error (invalid flag combination, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An event line that is not valid JSON, wrapped for diagnostic reporting.
    #[error("cannot decode event {line:?}: {source}")]
    Decode {
        line: String,
        source: serde_json::Error,
    },

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}
