//! OpenAI provider configuration

use crate::constants::OPENAI_DEFAULT_BASE_URL;
use std::fmt;

/// Configuration for an OpenAI-compatible endpoint
#[derive(Clone)]
pub struct OpenAIConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API, including the version segment
    pub base_url: String,
}

impl OpenAIConfig {
    /// Create a new configuration with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENAI_DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the URL for chat completions
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_url() {
        let config = OpenAIConfig::new("key");
        assert_eq!(
            config.chat_url(),
            "https://api.openai.com/v1/chat/completions"
        );

        let config = OpenAIConfig::new("key").with_base_url("https://api.together.xyz/v1/");
        assert_eq!(
            config.chat_url(),
            "https://api.together.xyz/v1/chat/completions"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = OpenAIConfig::new("sk-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
