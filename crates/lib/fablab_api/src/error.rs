//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fablab_core::facts;
use fablab_core::provider::RelayError;
use thiserror::Error;

use crate::models::ChatReply;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// Every variant renders as a `{ "reply": ... }` body with a fixed sentence;
/// the error detail is only logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Empty message")]
    EmptyMessage,

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyMessage | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            AppError::EmptyMessage => facts::EMPTY_MESSAGE_REPLY,
            AppError::InvalidRequest(_) => facts::INVALID_REQUEST_REPLY,
            AppError::Relay(e) => e.user_reply(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(ChatReply::new(self.reply()))).into_response()
    }
}
