//! API server configuration.

use std::path::PathBuf;

use fablab_core::provider::config::RelayConfig;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_STATIC_ROOT: &str = "public";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:3001").
    pub bind_addr: String,
    /// Directory the site files are served from.
    pub static_root: PathBuf,
    /// Completion provider settings.
    pub relay: RelayConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            static_root: PathBuf::from(DEFAULT_STATIC_ROOT),
            relay: RelayConfig::default(),
        }
    }
}
