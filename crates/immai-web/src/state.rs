//! Shared application state for the web server.

use std::sync::Arc;

use immai_locator::LawyerDirectory;
use immai_navigator::Navigator;
use immai_relay::RelayService;

use crate::config::Config;
use crate::resources::{self, Resource};

/// Shared state injected into every Axum handler.
///
/// Everything here is read-only after startup.
pub struct AppState {
    pub relay: RelayService,
    pub navigator: Navigator,
    pub lawyers: LawyerDirectory,
    pub resources: Vec<Resource>,
}

impl AppState {
    /// State around `relay` with the bundled datasets.
    pub fn new(relay: RelayService) -> anyhow::Result<Self> {
        Ok(Self {
            relay,
            navigator: Navigator::bundled()?,
            lawyers: LawyerDirectory::bundled()?,
            resources: resources::bundled()?,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(RelayService::new(&config.relay))
    }
}

pub type SharedState = Arc<AppState>;
