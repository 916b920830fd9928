//! Lawyer locator.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use immai_common::ApiError;
use immai_locator::{Coordinates, Lawyer, NearbyLawyer};
use serde::{Deserialize, Serialize};

use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct LawyerFilter {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub limit: Option<usize>,
}

/// Nearby lawyers when the user's position is known, else the directory.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LawyerListing {
    Nearby(Vec<NearbyLawyer>),
    Directory(Vec<Lawyer>),
}

/// GET /api/lawyers?lat=&lng=&limit= - Lawyers, nearest first when located
pub async fn api_lawyers(
    State(state): State<SharedState>,
    filter: Result<Query<LawyerFilter>, QueryRejection>,
) -> Result<Json<LawyerListing>, ApiError> {
    let Query(filter) = filter.map_err(|r| ApiError::bad_request(r.body_text()))?;

    let listing = match (filter.lat, filter.lng) {
        (Some(lat), Some(lng)) => {
            let origin = Coordinates::new(lat, lng)
                .map_err(|e| ApiError::bad_request(e.to_string()))?;
            LawyerListing::Nearby(state.lawyers.nearby(origin, filter.limit))
        }
        (None, None) => {
            let limit = filter.limit.unwrap_or(usize::MAX);
            LawyerListing::Directory(state.lawyers.all().iter().take(limit).cloned().collect())
        }
        _ => return Err(ApiError::bad_request("Both lat and lng are required")),
    };

    Ok(Json(listing))
}
