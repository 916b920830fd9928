//! Pathway catalog: categories own subcategories own paths.
//!
//! Ids are unique among siblings. Path ids are additionally unique across the
//! whole catalog, since detail pages are keyed by path id alone.

use immai_common::{parse_yaml, DatasetError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::Result;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.yaml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Accent colour the client draws the category with.
    #[serde(rename = "color")]
    pub color_token: String,
    pub subcategories: Vec<Subcategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub paths: Vec<Path>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub id: String,
    pub title: String,
    /// Form codes, looked up in the form table.
    pub forms: Vec<String>,
}

impl Category {
    pub fn subcategory(&self, id: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }
}

impl Subcategory {
    pub fn path(&self, id: &str) -> Option<&Path> {
        self.paths.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

/// Validated, read-only category forest.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_yaml(BUNDLED_CATALOG)
    }

    pub fn from_yaml(src: &str) -> Result<Self> {
        let file: CatalogFile = parse_yaml("catalog", src)?;
        Self::new(file.categories)
    }

    pub fn new(categories: Vec<Category>) -> Result<Self> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Resolve a full category/subcategory/path triple.
    pub fn resolve(
        &self,
        category_id: &str,
        subcategory_id: &str,
        path_id: &str,
    ) -> Option<(&Category, &Subcategory, &Path)> {
        let category = self.category(category_id)?;
        let subcategory = category.subcategory(subcategory_id)?;
        let path = subcategory.path(path_id)?;
        Some((category, subcategory, path))
    }

    /// Locate a path anywhere in the forest.
    pub fn find_path(&self, path_id: &str) -> Option<(&Category, &Subcategory, &Path)> {
        self.categories.iter().find_map(|c| {
            c.subcategories.iter().find_map(|s| s.path(path_id).map(|p| (c, s, p)))
        })
    }

    /// Every path in catalog order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| s.paths.iter())
    }
}

fn validate(categories: &[Category]) -> std::result::Result<(), DatasetError> {
    let mut category_ids = HashSet::new();
    let mut path_ids = HashSet::new();

    for category in categories {
        if category.id.is_empty() {
            return Err(DatasetError::invalid("catalog", "category with empty id"));
        }
        if !category_ids.insert(category.id.as_str()) {
            return Err(DatasetError::invalid(
                "catalog",
                format!("duplicate category id '{}'", category.id),
            ));
        }

        let mut subcategory_ids = HashSet::new();
        for subcategory in &category.subcategories {
            if !subcategory_ids.insert(subcategory.id.as_str()) {
                return Err(DatasetError::invalid(
                    "catalog",
                    format!("duplicate subcategory id '{}' in '{}'", subcategory.id, category.id),
                ));
            }
            for path in &subcategory.paths {
                if !path_ids.insert(path.id.as_str()) {
                    return Err(DatasetError::invalid(
                        "catalog",
                        format!("duplicate path id '{}'", path.id),
                    ));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
categories:
- id: family
  title: Family-Based
  subtitle: Green Cards
  color: '#4285f4'
  subcategories:
  - id: immediate
    title: Immediate Relatives
    paths:
    - { id: spouse, title: Spouse of a U.S. citizen, forms: [I-130, I-485] }
- id: military
  title: Military Pathways
  subtitle: Service Members
  color: '#03a9f4'
  subcategories:
  - id: military-naturalization
    title: Military Service Members and Veterans
    subtitle: Active duty
    paths:
    - { id: military-service, title: Military Service Naturalization, forms: [N-400, N-426] }
"#;

    #[test]
    fn test_parse_and_lookup() {
        let catalog = Catalog::from_yaml(SMALL).unwrap();
        assert_eq!(catalog.categories().len(), 2);

        let family = catalog.category("family").unwrap();
        assert_eq!(family.color_token, "#4285f4");
        assert!(family.subcategory("immediate").unwrap().subtitle.is_none());

        let (c, s, p) = catalog.find_path("military-service").unwrap();
        assert_eq!((c.id.as_str(), s.id.as_str()), ("military", "military-naturalization"));
        assert_eq!(p.forms, vec!["N-400", "N-426"]);
    }

    #[test]
    fn test_resolve_requires_matching_parents() {
        let catalog = Catalog::from_yaml(SMALL).unwrap();
        assert!(catalog.resolve("family", "immediate", "spouse").is_some());
        assert!(catalog.resolve("military", "immediate", "spouse").is_none());
        assert!(catalog.resolve("family", "immediate", "military-service").is_none());
    }

    #[test]
    fn test_duplicate_subcategory_rejected() {
        let src = SMALL.replace("id: military-naturalization", "id: immediate");
        // Same subcategory id under different categories is fine.
        assert!(Catalog::from_yaml(&src).is_ok());

        let mut catalog = Catalog::from_yaml(SMALL).unwrap().categories().to_vec();
        let dup = catalog[0].subcategories[0].clone();
        catalog[0].subcategories.push(Subcategory { paths: vec![], ..dup });
        let err = Catalog::new(catalog).unwrap_err();
        assert!(err.to_string().contains("duplicate subcategory id 'immediate'"));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let src = SMALL.replace("id: military-service", "id: spouse");
        let err = Catalog::from_yaml(&src).unwrap_err();
        assert!(err.to_string().contains("duplicate path id 'spouse'"));
    }

    #[test]
    fn test_serializes_with_color_key() {
        let catalog = Catalog::from_yaml(SMALL).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json[0]["color"], "#4285f4");
        assert!(json[0]["subcategories"][0].get("subtitle").is_none());
    }
}
