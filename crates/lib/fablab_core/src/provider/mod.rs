//! Provider relay: forwards unmatched messages to a chat-completion API.
//!
//! # Public API
//!
//! - [`CompletionProvider`]: the seam handlers call; swap it for a stub in tests
//! - [`client::ChatCompletionClient`]: OpenAI-compatible HTTP implementation
//! - [`config::RelayConfig`]: endpoint, model, credential and timeout
//!
//! Each call is single-turn: one system message and one user message. There is
//! no history, no streaming and no retry.

pub mod client;
pub mod config;
pub mod models;

use async_trait::async_trait;
use thiserror::Error;

use crate::facts;

/// Errors that can occur while relaying a message to the provider.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Provider API key is not set")]
    MissingApiKey,

    #[error("Provider request failed: {0}")]
    Transport(String),

    #[error("Provider returned {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Provider {
        status: u16,
        message: Option<String>,
    },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl RelayError {
    /// Sentence shown to the visitor; error details stay in the logs.
    pub fn user_reply(&self) -> &'static str {
        facts::FALLBACK_REPLY
    }
}

/// Produces a completion for a single user message.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, message: &str) -> Result<String, RelayError>;

    /// Whether a call has a chance of succeeding (credential present).
    fn is_configured(&self) -> bool {
        true
    }
}
