//! immai-locator: Immigration lawyer directory sorted by distance from the user.

pub mod directory;
pub mod distance;
pub mod error;

pub use directory::{Lawyer, LawyerDirectory, NearbyLawyer};
pub use distance::{haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use error::{LocatorError, Result};
