//! Read-only pathway catalog and form descriptions.

use axum::{
    extract::{Path, State},
    Json,
};
use immai_common::ApiError;
use immai_navigator::{Catalog, FormTable, NavigatorError, PathView};

use crate::state::SharedState;

/// GET /api/pathways - The category forest
pub async fn api_pathways(State(state): State<SharedState>) -> Json<Catalog> {
    Json(state.navigator.catalog().clone())
}

/// GET /api/forms - Form code to description map
pub async fn api_forms(State(state): State<SharedState>) -> Json<FormTable> {
    Json(state.navigator.forms().clone())
}

/// GET /api/pathways/{path_id} - Detail view of one path, full or pending
pub async fn api_path_detail(
    State(state): State<SharedState>,
    Path(path_id): Path<String>,
) -> Result<Json<PathView>, ApiError> {
    state
        .navigator
        .path_view(&path_id)
        .map(Json)
        .map_err(|e| match e {
            NavigatorError::UnknownPath(_) => ApiError::not_found(e.to_string()),
            other => ApiError::internal(other.to_string()),
        })
}
