use crate::{Result, types::Content};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A large-language-model service.
///
/// Implementations perform exactly one outbound call per `generate_content` invocation
/// and never retry internally; failures surface to the caller as [`crate::PrdError`].
#[async_trait]
pub trait Llm: Send + Sync {
    fn name(&self) -> &str;
    async fn generate_content(&self, req: LlmRequest) -> Result<LlmResponse>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmRequest {
    pub model: String,
    pub contents: Vec<Content>,
    pub config: Option<GenerateContentConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentConfig {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    /// Name reported to providers that require one alongside the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: Option<Content>,
    pub usage_metadata: Option<UsageMetadata>,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageMetadata {
    pub prompt_token_count: i32,
    pub candidates_token_count: i32,
    pub total_token_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, contents: Vec<Content>) -> Self {
        Self { model: model.into(), contents, config: None }
    }

    /// Set the response schema for structured output.
    pub fn with_response_schema(
        mut self,
        name: impl Into<String>,
        schema: serde_json::Value,
    ) -> Self {
        let config = self.config.get_or_insert_with(GenerateContentConfig::default);
        config.response_schema = Some(schema);
        config.response_schema_name = Some(name.into());
        self
    }

    /// Set the generation config, keeping any response schema already attached.
    pub fn with_config(mut self, config: GenerateContentConfig) -> Self {
        let previous = self.config.take().unwrap_or_default();
        self.config = Some(GenerateContentConfig {
            response_schema: config.response_schema.or(previous.response_schema),
            response_schema_name: config.response_schema_name.or(previous.response_schema_name),
            ..config
        });
        self
    }

    /// The response schema attached to this request, if any.
    pub fn response_schema(&self) -> Option<&serde_json::Value> {
        self.config.as_ref().and_then(|c| c.response_schema.as_ref())
    }
}

impl LlmResponse {
    pub fn new(content: Content) -> Self {
        Self { content: Some(content), usage_metadata: None, finish_reason: Some(FinishReason::Stop) }
    }

    /// Shorthand for a model response holding a single text part.
    pub fn text_response(text: impl Into<String>) -> Self {
        Self::new(Content::new("model").with_text(text))
    }

    /// Concatenated text of the response, empty when there is no content.
    pub fn text(&self) -> String {
        self.content.as_ref().map(Content::text).unwrap_or_default()
    }
}
