//! Chat request handler.
//!
//! Canned answers come straight from the keyword classifier; everything else
//! is relayed to the completion provider. The body is parsed by hand so that
//! malformed JSON gets the usual `{ "reply": ... }` shape instead of an axum
//! rejection.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use fablab_core::classifier::{self, Classification};
use serde_json::Value;
use tracing::{debug, error};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatReply, ChatRequest};

/// `POST /api/chat`: answer one visitor message.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ChatReply>> {
    let message =
        parse_message(&body).inspect_err(|e| debug!(error = %e, "rejected chat request"))?;

    if let Classification::Canned { category, reply } = classifier::classify(&message) {
        debug!(category = category.as_str(), "canned reply");
        return Ok(Json(ChatReply::new(reply)));
    }

    let reply = state
        .provider
        .complete(&message)
        .await
        .inspect_err(|e| error!(error = %e, "provider relay failed"))?;

    Ok(Json(ChatReply::new(reply)))
}

/// Extracts the trimmed message. An empty body counts as `{}`; valid JSON
/// that is not an object has no `message` and counts as empty too.
fn parse_message(body: &[u8]) -> AppResult<String> {
    if body.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    let invalid = |e: serde_json::Error| AppError::InvalidRequest(e.to_string());

    // Parse to a `Value` first: derived struct impls also accept JSON arrays.
    let request = match serde_json::from_slice::<Value>(body).map_err(invalid)? {
        fields @ Value::Object(_) => {
            serde_json::from_value::<ChatRequest>(fields).map_err(invalid)?
        }
        _ => return Err(AppError::EmptyMessage),
    };

    let message = request.message.unwrap_or_default();
    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    Ok(message.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_trims_message() {
        let message = parse_message(r#"{"message": "  Привет  "}"#.as_bytes()).expect("message");
        assert_eq!(message, "Привет");
    }

    #[test]
    fn ignores_unknown_fields() {
        let message = parse_message(br#"{"message": "hi", "history": []}"#).expect("message");
        assert_eq!(message, "hi");
    }

    #[test]
    fn empty_inputs_are_empty_message() {
        for body in [
            &b""[..],
            b"{}",
            b"null",
            br#"["hi"]"#,
            br#""hi""#,
            b"42",
            br#"{"message": null}"#,
            br#"{"message": ""}"#,
            br#"{"message": " \n\t "}"#,
        ] {
            assert!(
                matches!(parse_message(body), Err(AppError::EmptyMessage)),
                "body: {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn malformed_inputs_are_invalid_request() {
        for body in [&b"{"[..], b"message=hi", br#"{"message": 42}"#, b"   "] {
            assert!(
                matches!(parse_message(body), Err(AppError::InvalidRequest(_))),
                "body: {}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
