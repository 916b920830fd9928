//! Official documents and links shown beside the chat.

use immai_common::{parse_yaml, DatasetError};
use serde::{Deserialize, Serialize};

const BUNDLED_RESOURCES: &str = include_str!("../data/resources.yaml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pdf,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub title: String,
    pub link: String,
}

#[derive(Debug, Deserialize)]
struct ResourcesFile {
    resources: Vec<Resource>,
}

pub fn bundled() -> Result<Vec<Resource>, DatasetError> {
    from_yaml(BUNDLED_RESOURCES)
}

pub fn from_yaml(src: &str) -> Result<Vec<Resource>, DatasetError> {
    let file: ResourcesFile = parse_yaml("resources", src)?;
    if let Some(bad) = file.resources.iter().find(|r| r.link.trim().is_empty()) {
        return Err(DatasetError::invalid("resources", format!("'{}' has no link", bad.title)));
    }
    Ok(file.resources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_resources() {
        let resources = bundled().unwrap();
        assert!(resources.iter().any(|r| r.kind == ResourceKind::Pdf));
        assert!(resources.iter().any(|r| r.kind == ResourceKind::Link));
        assert!(resources.iter().all(|r| r.link.starts_with("https://")));
    }

    #[test]
    fn test_missing_link_rejected() {
        let src = "resources:\n- { kind: pdf, title: Blank, link: '' }\n";
        assert!(from_yaml(src).is_err());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let src = "resources:\n- { kind: video, title: Clip, link: https://example.org }\n";
        assert!(from_yaml(src).is_err());
    }
}
