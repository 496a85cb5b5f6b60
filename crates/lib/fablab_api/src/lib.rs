//! # fablab_api
//!
//! HTTP API library for the FabLab chat relay.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod static_files;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use fablab_core::provider::client::ChatCompletionClient;
use fablab_core::provider::{CompletionProvider, RelayError};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{chat, health};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Completion backend for messages no keyword rule answers.
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// Builds state backed by the real chat-completions client.
    pub fn new(config: ApiConfig) -> Result<Self, RelayError> {
        let client = ChatCompletionClient::new(config.relay.clone())?;
        Ok(Self::with_provider(config, Arc::new(client)))
    }

    pub fn with_provider(config: ApiConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { config, provider }
    }
}

/// Builds the Axum router with all routes and shared state.
///
/// Requests that match no API route, or an API path with another method,
/// fall through to the static file responder.
pub fn router(state: AppState) -> Router {
    let site = static_files::router(&state.config.static_root);

    Router::new()
        .route(
            routes::API_CHAT,
            post(chat::chat_handler).fallback_service(site.clone()),
        )
        .route(
            routes::API_HEALTH,
            get(health::health_handler).fallback_service(site.clone()),
        )
        .fallback_service(site)
        .layer(axum::middleware::from_fn(middleware::cors::cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
