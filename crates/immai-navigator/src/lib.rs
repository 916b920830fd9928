//! immai-navigator: Green card pathway navigator.
//! Provides:
//!   - the category → subcategory → path catalog
//!   - form descriptions and per-path detail pages
//!   - toggle-based selection state and its derived detail view
//!   - a serializable action reducer shared by every page variant

pub mod catalog;
pub mod details;
pub mod error;
pub mod forms;
pub mod navigator;
pub mod selection;

pub use catalog::{Catalog, Category, Path, Subcategory};
pub use details::{DetailTable, PathDetail};
pub use error::{NavigatorError, Result};
pub use forms::{FormRef, FormTable};
pub use navigator::{Navigator, PathView, SelectionAction};
pub use selection::{ChatHandoff, DetailView, SelectedPath, SelectionState};
