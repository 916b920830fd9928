//! Launching the external answering process.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

use crate::config::RelayConfig;
use crate::error::RunnerError;

/// Everything the child left behind once it exited.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// Exit code; `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Runs the answering process for one query.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Spawn one child with `query` in its environment and wait for it to exit.
    async fn run(&self, query: &str) -> Result<ProcessOutput, RunnerError>;
}

/// [`ProcessRunner`] backed by `tokio::process::Command`.
pub struct CommandRunner {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    query_env: String,
    timeout: Option<Duration>,
}

impl CommandRunner {
    pub fn new(program: impl Into<String>, query_env: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            query_env: query_env.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            working_dir: config.working_dir.clone(),
            query_env: config.query_env.clone(),
            timeout: config.timeout(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl ProcessRunner for CommandRunner {
    async fn run(&self, query: &str) -> Result<ProcessOutput, RunnerError> {
        debug!(program = %self.program, args = ?self.args, "spawning answering process");

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .env(&self.query_env, query)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        // output() pipes stdout/stderr and drains both until the child exits.
        let pending = cmd.output();
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, pending)
                .await
                .map_err(|_| RunnerError::TimedOut(limit))?,
            None => pending.await,
        };

        let output = result.map_err(|source| RunnerError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_copies_launch_settings() {
        let cfg = RelayConfig {
            program: "python3".into(),
            args: vec!["rag.py".into()],
            timeout_secs: Some(5),
            ..Default::default()
        };
        let runner = CommandRunner::from_config(&cfg);
        assert_eq!(runner.program, "python3");
        assert_eq!(runner.args, vec!["rag.py".to_string()]);
        assert_eq!(runner.query_env, "TEST_QUERY");
        assert_eq!(runner.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_output_success_requires_zero() {
        let ok = ProcessOutput { exit_code: Some(0), ..Default::default() };
        let failed = ProcessOutput { exit_code: Some(1), ..Default::default() };
        let signalled = ProcessOutput { exit_code: None, ..Default::default() };
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!signalled.success());
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let runner = CommandRunner::new("immai-definitely-not-installed", "TEST_QUERY");
        let err = runner.run("hello").await.unwrap_err();
        assert!(matches!(err, RunnerError::Spawn { .. }));
    }
}
