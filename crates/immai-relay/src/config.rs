//! Relay configuration, read from the `[relay]` table of immai.toml.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// How the external answering process is launched and read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Executable to launch, resolved through PATH.
    #[serde(default = "default_program")]
    pub program: String,

    /// Fixed arguments (the query is never passed here).
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Working directory for the child; inherits the server's when unset.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Environment variable carrying the query text.
    #[serde(default = "default_query_env")]
    pub query_env: String,

    /// Line that precedes the substantive answer in stdout. Must not be
    /// empty; only text after a line ending in this marker is returned.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Kill the child after this many seconds. Unset means wait forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_program()   -> String      { "python".to_string() }
fn default_args()      -> Vec<String> { vec!["src/rag.py".to_string()] }
fn default_query_env() -> String      { "TEST_QUERY".to_string() }
fn default_marker()    -> String      { "Answer from GPT-4o:".to_string() }

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            working_dir: None,
            query_env: default_query_env(),
            marker: default_marker(),
            timeout_secs: None,
        }
    }
}

impl RelayConfig {
    /// Reject settings that would make every answer the raw output or
    /// hide the query from the child.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.trim().is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.query_env.trim().is_empty() {
            return Err(ConfigError::EmptyQueryEnv);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_answer_script() {
        let cfg = RelayConfig::default();
        assert_eq!(cfg.program, "python");
        assert_eq!(cfg.query_env, "TEST_QUERY");
        assert_eq!(cfg.marker, "Answer from GPT-4o:");
        assert!(cfg.timeout().is_none());
    }

    #[test]
    fn test_defaults_validate() {
        assert_eq!(RelayConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_blank_marker_rejected() {
        for marker in ["", "   "] {
            let cfg = RelayConfig { marker: marker.into(), ..Default::default() };
            assert_eq!(cfg.validate(), Err(ConfigError::EmptyMarker));
        }
        let cfg = RelayConfig { query_env: String::new(), ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyQueryEnv));
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let cfg = RelayConfig { timeout_secs: Some(0), ..Default::default() };
        assert!(cfg.timeout().is_none());

        let cfg = RelayConfig { timeout_secs: Some(30), ..Default::default() };
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(30)));
    }
}
