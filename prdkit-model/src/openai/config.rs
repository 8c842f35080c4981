//! Configuration types for OpenAI-compatible providers.

use serde::{Deserialize, Serialize};

/// Default OpenAI API base URL.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Default model used for both pipeline stages.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Configuration for an OpenAI-compatible API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Model name (e.g., "gpt-4.1-mini", "gpt-4o").
    pub model: String,
    /// Optional custom base URL for OpenAI-compatible APIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self { api_key: String::new(), model: DEFAULT_MODEL.to_string(), base_url: None }
    }
}

impl OpenAIConfig {
    /// Create a new OpenAI config with the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), model: model.into(), ..Default::default() }
    }

    /// Create a config for an OpenAI-compatible API (e.g., Ollama, vLLM, LM Studio).
    pub fn compatible(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self { api_key: api_key.into(), model: model.into(), base_url: Some(base_url.into()) }
    }

    /// Set custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Get the effective base URL, without a trailing slash.
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_API_BASE).trim_end_matches('/')
    }
}
