//! immai-relay: Chat query relay.
//!
//! Forwards a user's question to an external answering process and relays
//! the answer found in its standard output:
//!   - the query travels in an environment variable, never argv or stdin
//!   - stdout/stderr are buffered until the child exits
//!   - the answer is the text after a marker line, or the whole output

pub mod config;
pub mod error;
pub mod extract;
pub mod runner;
pub mod service;
pub mod types;

pub use config::RelayConfig;
pub use error::{ConfigError, RelayError, RunnerError};
pub use runner::{CommandRunner, ProcessOutput, ProcessRunner};
pub use service::RelayService;
pub use types::{ChatAnswer, ChatQuery, RelayOutcome};
