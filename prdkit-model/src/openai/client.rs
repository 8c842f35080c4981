//! OpenAI client implementation.

use super::config::OpenAIConfig;
use super::convert::{self, ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use prdkit_core::{Llm, LlmRequest, LlmResponse, PrdError, Result};
use reqwest::Client;
use tracing::debug;

/// OpenAI client for the standard OpenAI API and OpenAI-compatible APIs.
///
/// Each call issues a single non-streaming chat completion request. There is no retry
/// layer: a transport failure or non-success status is returned as
/// [`PrdError::Service`].
///
/// # Example
///
/// ```rust,ignore
/// use prdkit_model::openai::{OpenAIClient, OpenAIConfig};
///
/// let client = OpenAIClient::new(OpenAIConfig::new(
///     std::env::var("OPENAI_API_KEY").unwrap(),
///     "gpt-4.1-mini",
/// ))?;
/// ```
pub struct OpenAIClient {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIClient {
    /// Create a new OpenAI client.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| PrdError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a client for an OpenAI-compatible API.
    pub fn compatible(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        Self::new(OpenAIConfig::compatible(api_key, base_url, model))
    }

    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    /// Build the API URL for chat completions.
    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.effective_base_url())
    }

    fn build_request(&self, request: &LlmRequest) -> ChatCompletionRequest {
        convert::build_request(&self.config.model, request)
    }
}

#[async_trait]
impl Llm for OpenAIClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate_content(&self, request: LlmRequest) -> Result<LlmResponse> {
        let chat_request = self.build_request(&request);
        debug!(
            model = %chat_request.model,
            messages = chat_request.messages.len(),
            structured = chat_request.response_format.is_some(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| PrdError::service(format!("OpenAI API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PrdError::service(format!("OpenAI API error ({status}): {error_text}")));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| PrdError::service(format!("Failed to decode OpenAI response: {e}")))?;

        if let Some(refusal) = completion
            .choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.refusal.as_deref())
        {
            return Err(PrdError::service(format!("Model refused the request: {refusal}")));
        }

        let llm_response = convert::from_openai_response(&completion)
            .ok_or_else(|| PrdError::service("OpenAI API returned an empty completion"))?;

        if llm_response.text().trim().is_empty() {
            return Err(PrdError::service("OpenAI API returned an empty completion"));
        }

        Ok(llm_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let client =
            OpenAIClient::compatible("key", "http://localhost:1234/v1/", "local-model").unwrap();
        assert_eq!(client.api_url(), "http://localhost:1234/v1/chat/completions");
        assert_eq!(client.name(), "local-model");
    }
}
