//! Chat relay endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use immai_common::ApiError;
use immai_relay::{ChatAnswer, ChatQuery, RelayError};
use tracing::warn;

use crate::state::SharedState;

/// POST /api/chat - Answer a question through the external process
pub async fn api_chat(
    State(state): State<SharedState>,
    payload: Result<Json<ChatQuery>, JsonRejection>,
) -> Result<Json<ChatAnswer>, ApiError> {
    // A body we cannot read carries no query.
    let query = match payload {
        Ok(Json(query)) => query,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "unreadable chat body");
            return Err(relay_error(RelayError::EmptyQuery));
        }
    };

    state.relay.relay(query.text()).await.map(Json).map_err(relay_error)
}

fn relay_error(err: RelayError) -> ApiError {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    ApiError::new(status, err.to_string())
}
