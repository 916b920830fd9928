//! Locator error types.

use immai_common::DatasetError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LocatorError>;

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Invalid coordinates: lat {lat}, lng {lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },
}
