//! Navigator error types.

use immai_common::DatasetError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NavigatorError>;

#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown subcategory '{subcategory}' in category '{category}'")]
    UnknownSubcategory { category: String, subcategory: String },

    #[error("Unknown pathway: {0}")]
    UnknownPath(String),

    #[error("No category selected")]
    NoCategorySelected,
}
