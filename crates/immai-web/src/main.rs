//! ImmAI Web Server
//!
//! Run with: cargo run -p immai-web

use immai_web::{config::Config, router::build_router, state::AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env: {e}");
        }
    }

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("immai=debug,info")),
        )
        .init();

    info!("Starting ImmAI web server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = match Config::load() {
        Ok(c) => {
            info!("Configuration loaded. Answer program: {} {:?}", c.relay.program, c.relay.args);
            c
        }
        Err(e) => {
            warn!("Could not load immai.toml: {e}");
            warn!("Continuing with built-in defaults.");
            Config::default()
        }
    };
    config.apply_overrides(|key| std::env::var(key).ok())?;

    let state = AppState::from_config(&config)?;
    info!(
        paths = state.navigator.catalog().paths().count(),
        lawyers = state.lawyers.all().len(),
        "datasets loaded"
    );

    let app = build_router(state, &config.server.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
