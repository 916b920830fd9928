//! Selection state of the pathway navigator.
//!
//! Category and subcategory selection toggle: picking the open node closes it,
//! picking another node replaces it. Either way everything below that level
//! is cleared. Picking a path always opens its details.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Path, Subcategory};
use crate::details::{DetailTable, PathDetail};
use crate::forms::{FormRef, FormTable};

/// The path whose details are shown, with the titles needed to render them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPath {
    pub category_id: String,
    pub subcategory_id: String,
    pub path_id: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub forms: Vec<String>,
}

impl SelectedPath {
    pub fn new(category: &Category, subcategory: &Subcategory, path: &Path) -> Self {
        Self {
            category_id: category.id.clone(),
            subcategory_id: subcategory.id.clone(),
            path_id: path.id.clone(),
            title: path.title.clone(),
            category: category.title.clone(),
            subcategory: subcategory.title.clone(),
            forms: path.forms.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionState {
    pub selected_category_id: Option<String>,
    pub selected_subcategory_id: Option<String>,
    pub selected_path: Option<SelectedPath>,
    pub show_details: bool,
}

/// What the detail panel shows for the selected path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DetailView {
    Complete {
        detail: PathDetail,
        forms: Vec<String>,
        form_descriptions: Vec<FormRef>,
    },
    /// No detail page exists yet; only the required forms are known.
    Pending {
        forms: Vec<String>,
        form_descriptions: Vec<FormRef>,
    },
}

impl DetailView {
    pub fn build(path_id: &str, forms: &[String], details: &DetailTable, table: &FormTable) -> Self {
        let form_descriptions = table.resolve(forms);
        match details.get(path_id) {
            Some(detail) => DetailView::Complete {
                detail: detail.clone(),
                forms: forms.to_vec(),
                form_descriptions,
            },
            None => DetailView::Pending { forms: forms.to_vec(), form_descriptions },
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DetailView::Pending { .. })
    }
}

/// Context handed to the chat page from "Chat about this".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHandoff {
    pub category: String,
    pub subcategory: String,
    pub pathway: String,
    pub forms: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_path_id(&self) -> Option<&str> {
        self.selected_path.as_ref().map(|p| p.path_id.as_str())
    }

    pub fn select_category(&mut self, id: &str) {
        if self.selected_category_id.as_deref() == Some(id) {
            self.selected_category_id = None;
        } else {
            self.selected_category_id = Some(id.to_string());
        }
        self.clear_below_category();
    }

    pub fn select_subcategory(&mut self, id: &str) {
        if self.selected_subcategory_id.as_deref() == Some(id) {
            self.selected_subcategory_id = None;
        } else {
            self.selected_subcategory_id = Some(id.to_string());
        }
        self.clear_below_subcategory();
    }

    pub fn select_path(&mut self, category: &Category, subcategory: &Subcategory, path: &Path) {
        self.selected_category_id = Some(category.id.clone());
        self.selected_subcategory_id = Some(subcategory.id.clone());
        self.selected_path = Some(SelectedPath::new(category, subcategory, path));
        self.show_details = true;
    }

    /// Detail panel contents, or `None` while no path is shown.
    pub fn current_detail(&self, details: &DetailTable, forms: &FormTable) -> Option<DetailView> {
        if !self.show_details {
            return None;
        }
        let path = self.selected_path.as_ref()?;
        Some(DetailView::build(&path.path_id, &path.forms, details, forms))
    }

    pub fn chat_handoff(&self) -> Option<ChatHandoff> {
        self.selected_path.as_ref().map(|p| ChatHandoff {
            category: p.category.clone(),
            subcategory: p.subcategory.clone(),
            pathway: p.title.clone(),
            forms: p.forms.clone(),
        })
    }

    fn clear_below_category(&mut self) {
        self.selected_subcategory_id = None;
        self.clear_below_subcategory();
    }

    fn clear_below_subcategory(&mut self) {
        self.selected_path = None;
        self.show_details = false;
    }
}
