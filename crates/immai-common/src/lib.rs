//! immai-common: Shared error types and dataset loading used across all ImmAI crates.

pub mod error;
pub mod dataset;

// Re-export commonly used types
pub use error::{ApiError, ErrorBody};
pub use dataset::{parse_yaml, DatasetError};
