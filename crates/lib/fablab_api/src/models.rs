//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// `POST /api/chat` request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// The only body shape the chat endpoint returns, on success and failure.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

/// `GET /api/health` response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider_configured: bool,
}
