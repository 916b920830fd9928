//! Stateless navigator reducer.
//!
//! The client owns its selection state and sends it back with every action;
//! the server never stores it.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use immai_common::ApiError;
use immai_navigator::{ChatHandoff, DetailView, SelectionAction, SelectionState};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct NavigatorRequest {
    /// Omitted on the first action of a session.
    #[serde(default)]
    pub state: SelectionState,
    pub action: SelectionAction,
}

#[derive(Debug, Serialize)]
pub struct NavigatorResponse {
    pub state: SelectionState,
    pub detail: Option<DetailView>,
    pub handoff: Option<ChatHandoff>,
}

/// POST /api/navigator - Apply one selection action
pub async fn api_navigator(
    State(state): State<SharedState>,
    payload: Result<Json<NavigatorRequest>, JsonRejection>,
) -> Result<Json<NavigatorResponse>, ApiError> {
    let Json(request) = payload.map_err(|r| ApiError::bad_request(r.body_text()))?;
    let NavigatorRequest { state: mut selection, action } = request;

    state
        .navigator
        .apply(&mut selection, &action)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    debug!(path = ?selection.selected_path_id(), show_details = selection.show_details, "navigator state updated");

    Ok(Json(NavigatorResponse {
        detail: state.navigator.current_detail(&selection),
        handoff: selection.chat_handoff(),
        state: selection,
    }))
}
