//! Relay error types.

use std::time::Duration;
use thiserror::Error;

/// Failure visible to the caller of [`crate::RelayService::relay`].
///
/// The messages are the exact strings placed in the HTTP error body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("No query content provided")]
    EmptyQuery,

    #[error("Failed to process query")]
    ProcessFailed,
}

impl RelayError {
    /// HTTP status the error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::EmptyQuery => 400,
            RelayError::ProcessFailed => 500,
        }
    }
}

/// Why the answering process could not produce output. Logged, never returned.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Failed to spawn answering process '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Answering process timed out after {0:?}")]
    TimedOut(Duration),
}

/// Rejected `[relay]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("relay.marker must not be empty")]
    EmptyMarker,

    #[error("relay.query_env must not be empty")]
    EmptyQueryEnv,
}
