//! Axum router: maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::{ServeDir, ServeFile},
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::path::Path;
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    chat::api_chat,
    pathways::{api_pathways, api_forms, api_path_detail},
    navigator::api_navigator,
    lawyers::api_lawyers,
    resources::api_resources,
    system::health,
};

/// Build and return the full Axum router.
///
/// Any GET that matches no route is served from `static_dir`, falling back
/// to its `index.html` so client-side routes resolve.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let shared: SharedState = Arc::new(state);
    let static_dir = static_dir.as_ref();
    let shell = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Chat relay
        .route("/api/chat", post(api_chat))

        // Pathway navigator
        .route("/api/pathways",           get(api_pathways))
        .route("/api/pathways/{path_id}", get(api_path_detail))
        .route("/api/forms",              get(api_forms))
        .route("/api/navigator",          post(api_navigator))

        // Lawyer locator and chat sidebar
        .route("/api/lawyers",   get(api_lawyers))
        .route("/api/resources", get(api_resources))

        .route("/health", get(health))

        // Client shell
        .fallback_service(shell)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
