//! OpenAI-compatible chat-completions client (SambaNova by default).
//!
//! One outbound POST per call, bounded by [`RelayConfig::timeout`]. The shared
//! `reqwest::Client` owns the connection pool; dropping the future of an
//! in-flight call releases its connection.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::config::RelayConfig;
use super::models::{CompletionRequest, CompletionResponse};
use super::{CompletionProvider, RelayError};
use crate::facts;

/// Relays single messages to the configured chat-completions endpoint.
pub struct ChatCompletionClient {
    http: Client,
    config: RelayConfig,
    system_prompt: String,
}

impl ChatCompletionClient {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::Transport(format!("HTTP client init failed: {e}")))?;

        Ok(Self {
            http,
            config,
            system_prompt: facts::system_prompt(),
        })
    }
}

#[async_trait]
impl CompletionProvider for ChatCompletionClient {
    async fn complete(&self, message: &str) -> Result<String, RelayError> {
        let api_key = self.config.api_key().ok_or(RelayError::MissingApiKey)?;

        let body = CompletionRequest::single_turn(&self.config.model, &self.system_prompt, message);

        let resp = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, timeout = e.is_timeout(), "provider request failed");
                RelayError::Transport(e.to_string())
            })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            warn!(error = %e, %status, "provider body read failed");
            RelayError::Transport(e.to_string())
        })?;

        let parsed = serde_json::from_str::<CompletionResponse>(&text);

        if !status.is_success() {
            let message = parsed
                .ok()
                .and_then(|r| r.error_message().map(str::to_owned));
            warn!(
                %status,
                provider_message = message.as_deref().unwrap_or("<none>"),
                "provider returned error status"
            );
            return Err(RelayError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = parsed.map_err(|e| {
            warn!(error = %e, "provider body is not valid JSON");
            debug!(body = %text, "unparsed provider body");
            RelayError::MalformedResponse(e.to_string())
        })?;

        if let Some(content) = parsed.content() {
            return Ok(content.to_owned());
        }

        if let Some(message) = parsed.error_message() {
            warn!(provider_message = message, "provider returned error payload");
            return Err(RelayError::Provider {
                status: status.as_u16(),
                message: Some(message.to_owned()),
            });
        }

        warn!("provider response has no completion text");
        debug!(body = %text, "unexpected provider body");
        Err(RelayError::MalformedResponse(
            "missing choices[0].message.content".into(),
        ))
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }
}
