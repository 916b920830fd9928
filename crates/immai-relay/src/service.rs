//! The relay service object constructed once at startup.

use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::extract::extract_answer;
use crate::runner::{CommandRunner, ProcessRunner};
use crate::types::{ChatAnswer, RelayOutcome};

/// Relays chat queries to the answering process.
///
/// Holds no mutable state; concurrent calls each spawn their own child.
#[derive(Clone)]
pub struct RelayService {
    runner: Arc<dyn ProcessRunner>,
    marker: String,
}

impl RelayService {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            runner: Arc::new(CommandRunner::from_config(config)),
            marker: config.marker.clone(),
        }
    }

    /// Build a service around any runner (used by tests to observe spawns).
    pub fn with_runner(runner: Arc<dyn ProcessRunner>, marker: impl Into<String>) -> Self {
        Self { runner, marker: marker.into() }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Answer `query` through the external process.
    pub async fn relay(&self, query: &str) -> RelayOutcome {
        if query.trim().is_empty() {
            warn!("rejecting chat query with no content");
            return Err(RelayError::EmptyQuery);
        }

        let request_id = Uuid::new_v4();
        info!(%request_id, query_len = query.len(), "relaying chat query");

        let output = match self.runner.run(query).await {
            Ok(output) => output,
            Err(e) => {
                error!(%request_id, error = %e, "answering process could not run");
                return Err(RelayError::ProcessFailed);
            }
        };

        if !output.success() {
            error!(
                %request_id,
                exit_code = ?output.exit_code,
                stderr = %output.stderr_lossy(),
                "answering process exited with error"
            );
            return Err(RelayError::ProcessFailed);
        }

        let answer = extract_answer(&output.stdout_lossy(), &self.marker);
        info!(%request_id, answer_len = answer.len(), "chat query answered");
        Ok(ChatAnswer { answer })
    }
}
