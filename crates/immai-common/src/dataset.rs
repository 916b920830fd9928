//! Loading of the static YAML datasets embedded in each crate.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to parse dataset '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid dataset '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

impl DatasetError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        DatasetError::Invalid { name: name.into(), reason: reason.into() }
    }
}

/// Parse a YAML document into `T`, tagging failures with the dataset name.
pub fn parse_yaml<T: DeserializeOwned>(name: &str, src: &str) -> Result<T, DatasetError> {
    let parsed = serde_yaml::from_str(src).map_err(|source| DatasetError::Parse {
        name: name.to_string(),
        source,
    })?;
    tracing::debug!(dataset = name, bytes = src.len(), "dataset parsed");
    Ok(parsed)
}
