//! Configuration loading for ImmAI.
//! Reads immai.toml from the current directory or the path in IMMAI_CONFIG.

use immai_relay::RelayConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub relay: RelayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Built client application, served for every unmatched GET.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host()       -> String  { "0.0.0.0".to_string() }
fn default_port()       -> u16     { 5000 }
fn default_static_dir() -> PathBuf { PathBuf::from("frontend/build") }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    /// Load configuration from immai.toml.
    /// Checks IMMAI_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("IMMAI_CONFIG")
            .unwrap_or_else(|_| "immai.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Copy immai.example.toml to immai.toml and edit it.",
                path.display()
            );
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.relay.validate()?;
        Ok(config)
    }

    /// Apply `PORT`, `IMMAI_ANSWER_PROGRAM` and `IMMAI_STATIC_DIR` on top of
    /// the file values. `lookup` is normally `std::env::var`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT '{port}': {e}"))?;
        }
        if let Some(program) = lookup("IMMAI_ANSWER_PROGRAM").filter(|p| !p.is_empty()) {
            self.relay.program = program;
        }
        if let Some(dir) = lookup("IMMAI_STATIC_DIR").filter(|d| !d.is_empty()) {
            self.server.static_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
