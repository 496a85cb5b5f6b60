//! FabLab site server.
//!
//! Serves the static site and the chat relay endpoint on one port.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fablab_api::config::{ApiConfig, DEFAULT_PORT, DEFAULT_STATIC_ROOT};
use fablab_core::provider::config::{DEFAULT_BASE_URL, DEFAULT_MODEL, RelayConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments; every option can also come from the environment or `.env`.
#[derive(Parser, Debug)]
#[command(name = "fablab_server", about = "FabLab site and chat relay server")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Directory with the site files.
    #[arg(long, env = "STATIC_ROOT", default_value = DEFAULT_STATIC_ROOT)]
    static_root: PathBuf,

    /// Bearer token for the completion provider.
    #[arg(long, env = "SAMBANOVA_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Provider API root.
    #[arg(long, env = "SAMBANOVA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Provider model identifier.
    #[arg(long, env = "SAMBANOVA_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Timeout for one provider call, in seconds.
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS", default_value_t = 30)]
    provider_timeout_secs: u64,
}

impl Args {
    fn into_config(self) -> ApiConfig {
        ApiConfig {
            bind_addr: format!("{}:{}", self.host, self.port),
            static_root: self.static_root,
            relay: RelayConfig {
                api_key: self.api_key,
                base_url: self.base_url,
                model: self.model,
                timeout: Duration::from_secs(self.provider_timeout_secs),
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fablab_api=debug,fablab_core=debug")),
        )
        .init();

    let config = Args::parse().into_config();

    info!(
        static_root = %config.static_root.display(),
        model = %config.relay.model,
        base_url = %config.relay.base_url,
        "starting fablab_server"
    );
    if !config.relay.is_configured() {
        warn!("SAMBANOVA_API_KEY is not set; questions without a canned answer will fail");
    }
    if !config.static_root.is_dir() {
        warn!(static_root = %config.static_root.display(), "static root is not a directory");
    }

    let state = fablab_api::AppState::new(config.clone())?;
    let app = fablab_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_build_api_config() {
        let args = Args::try_parse_from([
            "fablab_server",
            "--api-key",
            "sk-test",
            "--port",
            "3001",
            "--host",
            "0.0.0.0",
            "--static-root",
            "public",
            "--base-url",
            DEFAULT_BASE_URL,
            "--model",
            DEFAULT_MODEL,
            "--provider-timeout-secs",
            "30",
        ])
        .expect("parse");
        let config = args.into_config();

        assert_eq!(config.bind_addr, "0.0.0.0:3001");
        assert_eq!(config.static_root, PathBuf::from("public"));
        assert_eq!(config.relay.timeout, Duration::from_secs(30));
        assert!(config.relay.is_configured());
    }

    #[test]
    fn args_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
