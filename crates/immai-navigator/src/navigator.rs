//! One navigator for every page variant.
//!
//! Page variants differ only in the detail table they are built with; the
//! catalog, form table and selection rules are shared.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::details::DetailTable;
use crate::error::{NavigatorError, Result};
use crate::forms::FormTable;
use crate::selection::{DetailView, SelectedPath, SelectionState};

/// A user action against the navigator, addressed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum SelectionAction {
    SelectCategory { id: String },
    SelectSubcategory { id: String },
    SelectPath {
        category_id: String,
        subcategory_id: String,
        path_id: String,
    },
}

/// A path with its detail view, independent of any selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathView {
    pub path: SelectedPath,
    pub detail: DetailView,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    forms: FormTable,
    details: DetailTable,
}

impl Navigator {
    pub fn new(catalog: Catalog, forms: FormTable, details: DetailTable) -> Self {
        Self { catalog, forms, details }
    }

    /// Navigator over the bundled catalog, forms and detail pages.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(Catalog::bundled()?, FormTable::bundled()?, DetailTable::bundled()?))
    }

    /// Same catalog and forms with a different detail table.
    pub fn with_details(&self, details: DetailTable) -> Self {
        Self { details, ..self.clone() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn forms(&self) -> &FormTable {
        &self.forms
    }

    pub fn details(&self) -> &DetailTable {
        &self.details
    }

    /// Apply `action` to `state`. On error `state` is left untouched.
    pub fn apply(&self, state: &mut SelectionState, action: &SelectionAction) -> Result<()> {
        debug!(?action, "applying navigator action");
        match action {
            SelectionAction::SelectCategory { id } => {
                if self.catalog.category(id).is_none() {
                    return Err(NavigatorError::UnknownCategory(id.clone()));
                }
                state.select_category(id);
            }
            SelectionAction::SelectSubcategory { id } => {
                let category_id = state
                    .selected_category_id
                    .as_deref()
                    .ok_or(NavigatorError::NoCategorySelected)?;
                let known = self
                    .catalog
                    .category(category_id)
                    .and_then(|c| c.subcategory(id))
                    .is_some();
                if !known {
                    return Err(NavigatorError::UnknownSubcategory {
                        category: category_id.to_string(),
                        subcategory: id.clone(),
                    });
                }
                state.select_subcategory(id);
            }
            SelectionAction::SelectPath { category_id, subcategory_id, path_id } => {
                let (category, subcategory, path) = self
                    .catalog
                    .resolve(category_id, subcategory_id, path_id)
                    .ok_or_else(|| NavigatorError::UnknownPath(path_id.clone()))?;
                state.select_path(category, subcategory, path);
            }
        }
        Ok(())
    }

    pub fn current_detail(&self, state: &SelectionState) -> Option<DetailView> {
        state.current_detail(&self.details, &self.forms)
    }

    /// Detail view for a path looked up by id alone.
    pub fn path_view(&self, path_id: &str) -> Result<PathView> {
        let (category, subcategory, path) = self
            .catalog
            .find_path(path_id)
            .ok_or_else(|| NavigatorError::UnknownPath(path_id.to_string()))?;
        Ok(PathView {
            path: SelectedPath::new(category, subcategory, path),
            detail: DetailView::build(&path.id, &path.forms, &self.details, &self.forms),
        })
    }
}
