//! Per-path detail pages. The table is sparse: a path with no entry is
//! shown as pending, not as an error.

use immai_common::parse_yaml;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

const BUNDLED_DETAILS: &str = include_str!("../data/details.yaml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathDetail {
    pub title: String,
    pub eligibility: String,
    pub timeframe: String,
    /// Ordered application steps.
    pub process: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Deserialize)]
struct DetailsFile {
    #[serde(default)]
    details: HashMap<String, PathDetail>,
}

#[derive(Debug, Clone, Default)]
pub struct DetailTable {
    entries: HashMap<String, PathDetail>,
}

impl DetailTable {
    pub fn bundled() -> Result<Self> {
        Self::from_yaml(BUNDLED_DETAILS)
    }

    pub fn from_yaml(src: &str) -> Result<Self> {
        let file: DetailsFile = parse_yaml("details", src)?;
        Ok(Self { entries: file.details })
    }

    /// A table with no entries; every path renders as pending.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, path_id: impl Into<String>, detail: PathDetail) -> Self {
        self.entries.insert(path_id.into(), detail);
        self
    }

    pub fn get(&self, path_id: &str) -> Option<&PathDetail> {
        self.entries.get(path_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_lookup() {
        let table = DetailTable::from_yaml(
            r#"
details:
  spouse:
    title: Spouse of a U.S. Citizen
    eligibility: Must be legally married to a U.S. citizen.
    timeframe: 12-24 months
    process: [File I-130, File I-485]
    notes: Conditional card if married under 2 years.
"#,
        )
        .unwrap();
        assert_eq!(table.get("spouse").unwrap().process.len(), 2);
        assert!(table.get("parents").is_none());
    }

    #[test]
    fn test_missing_details_key_is_empty_table() {
        let table = DetailTable::from_yaml("{}").unwrap();
        assert!(table.is_empty());
    }
}
