//! Form code → description lookup.

use immai_common::parse_yaml;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

const BUNDLED_FORMS: &str = include_str!("../data/forms.yaml");

/// A form code with its description, if one is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRef {
    pub code: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FormsFile {
    forms: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FormTable {
    descriptions: BTreeMap<String, String>,
}

impl FormTable {
    pub fn bundled() -> Result<Self> {
        Self::from_yaml(BUNDLED_FORMS)
    }

    pub fn from_yaml(src: &str) -> Result<Self> {
        let file: FormsFile = parse_yaml("forms", src)?;
        Ok(Self { descriptions: file.forms })
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            descriptions: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn describe(&self, code: &str) -> Option<&str> {
        self.descriptions.get(code).map(String::as_str)
    }

    /// Resolve codes in order; unknown codes keep a `None` description.
    pub fn resolve(&self, codes: &[String]) -> Vec<FormRef> {
        codes
            .iter()
            .map(|code| FormRef {
                code: code.clone(),
                description: self.describe(code).map(str::to_string),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}
