//! Provider relay configuration.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.sambanova.ai/v1";
pub const DEFAULT_MODEL: &str = "Meta-Llama-3.3-70B-Instruct";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved provider configuration.
#[derive(Clone)]
pub struct RelayConfig {
    /// Bearer token; `None` makes every call fail with a config error.
    pub api_key: Option<String>,
    /// API root without the `/chat/completions` suffix.
    pub base_url: String,
    pub model: String,
    /// Upper bound for one outbound call, connect to last byte.
    pub timeout: Duration,
}

impl RelayConfig {
    /// Returns the API key if one is set and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    /// Full URL of the chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_url_joins_without_double_slash() {
        let mut config = RelayConfig::default();
        assert_eq!(
            config.completions_url(),
            "https://api.sambanova.ai/v1/chat/completions"
        );
        config.base_url = "http://127.0.0.1:1234/".into();
        assert_eq!(config.completions_url(), "http://127.0.0.1:1234/chat/completions");
    }

    #[test]
    fn blank_key_is_not_configured() {
        let mut config = RelayConfig::default();
        assert!(!config.is_configured());
        config.api_key = Some("   ".into());
        assert!(!config.is_configured());
        config.api_key = Some("sk-test".into());
        assert!(config.is_configured());
    }

    #[test]
    fn debug_redacts_key() {
        let config = RelayConfig {
            api_key: Some("sk-secret".into()),
            ..RelayConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
