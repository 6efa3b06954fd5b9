//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use grammar_core::model::RuleError;

/// Errors emitted while loading the rules document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("rules request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("rules document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] RuleError),
}

/// Coarse classification of a `LoadError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadFailure {
    /// The document could not be fetched.
    Status,
    /// The document was fetched but is malformed.
    Parse,
}

impl LoadError {
    #[must_use]
    pub fn kind(&self) -> LoadFailure {
        match self {
            Self::Status(_) | Self::Http(_) | Self::Io { .. } => LoadFailure::Status,
            Self::Parse(_) | Self::Invalid(_) => LoadFailure::Parse,
        }
    }
}

/// Errors emitted while parsing a rules location.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LocationError {
    #[error("rules location cannot be empty")]
    Empty,
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("invalid file URL: {0}")]
    InvalidFileUrl(String),
}
