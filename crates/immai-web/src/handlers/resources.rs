use axum::{extract::State, Json};

use crate::resources::Resource;
use crate::state::SharedState;

/// GET /api/resources - Documents and links listed beside the chat
pub async fn api_resources(State(state): State<SharedState>) -> Json<Vec<Resource>> {
    Json(state.resources.clone())
}
