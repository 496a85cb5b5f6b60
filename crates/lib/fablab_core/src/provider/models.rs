//! Wire types for the OpenAI-compatible chat-completions API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Request body: system instruction plus the single user message.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub stream: bool,
}

impl<'a> CompletionRequest<'a> {
    pub fn single_turn(model: &'a str, system: &'a str, message: &'a str) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
            stream: false,
        }
    }
}

/// Response body. Every field is optional so that error payloads and
/// unexpected shapes still deserialize and can be told apart.
#[derive(Debug, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if present and non-empty.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .filter(|c| !c.is_empty())
    }

    /// Provider's own explanation of a failure.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|e| e.message.as_deref())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn request_has_system_then_user_and_no_streaming() {
        let req = CompletionRequest::single_turn("m", "sys", "hi");
        let v: Value = serde_json::to_value(&req).expect("serialize");
        assert_eq!(
            v,
            json!({
                "model": "m",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ],
                "stream": false
            })
        );
    }

    #[test]
    fn content_from_first_choice() {
        let resp: CompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "Привет!"}}]
        }))
        .expect("parse");
        assert_eq!(resp.content(), Some("Привет!"));
        assert_eq!(resp.error_message(), None);
    }

    #[test]
    fn error_payload_has_no_content() {
        let resp: CompletionResponse = serde_json::from_value(json!({
            "error": {"message": "model overloaded", "type": "server_error"}
        }))
        .expect("parse");
        assert_eq!(resp.content(), None);
        assert_eq!(resp.error_message(), Some("model overloaded"));
    }

    #[test]
    fn empty_or_missing_content_is_none() {
        let resp: CompletionResponse =
            serde_json::from_value(json!({"choices": [{"message": {"content": ""}}]}))
                .expect("parse");
        assert_eq!(resp.content(), None);

        let resp: CompletionResponse =
            serde_json::from_value(json!({"choices": []})).expect("parse");
        assert_eq!(resp.content(), None);
    }
}
