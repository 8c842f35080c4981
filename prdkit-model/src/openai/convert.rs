//! Wire types and conversions for the OpenAI chat completions API.

use prdkit_core::{Content, FinishReason, LlmRequest, LlmResponse, UsageMetadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refusal: Option<String>,
}

/// `response_format` entry for schema-constrained output.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
    pub json_schema: JsonSchemaFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub schema: Value,
    pub strict: bool,
}

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<Message>,
    pub finish_reason: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Map content roles onto OpenAI chat roles.
pub fn content_to_message(content: &Content) -> Message {
    let role = match content.role.as_str() {
        "model" | "assistant" => "assistant",
        "system" => "system",
        _ => "user",
    };
    Message { role: role.to_string(), content: Some(content.text()), refusal: None }
}

/// Build the wire request for `request`, sent to `model`.
pub fn build_request(model: &str, request: &LlmRequest) -> ChatCompletionRequest {
    let messages = request.contents.iter().map(content_to_message).collect();
    let config = request.config.as_ref();

    let response_format = config.and_then(|c| {
        let schema = c.response_schema.as_ref()?;
        let mut schema_with_strict = schema.clone();
        if let Some(obj) = schema_with_strict.as_object_mut() {
            obj.insert("additionalProperties".to_string(), serde_json::json!(false));
        }
        let name = c
            .response_schema_name
            .clone()
            .unwrap_or_else(|| model.replace(['-', '.', '/'], "_"));
        Some(ResponseFormat {
            format_type: "json_schema".to_string(),
            json_schema: JsonSchemaFormat { name, schema: schema_with_strict, strict: true },
        })
    });

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        temperature: config.and_then(|c| c.temperature),
        top_p: config.and_then(|c| c.top_p),
        max_tokens: config.and_then(|c| c.max_output_tokens).map(|t| t.max(0) as u32),
        stream: false,
        response_format,
    }
}

pub fn convert_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "stop" => FinishReason::Stop,
        "length" => FinishReason::MaxTokens,
        "content_filter" => FinishReason::Safety,
        _ => FinishReason::Other,
    }
}

/// Convert the first choice of a completion into an [`LlmResponse`].
///
/// Returns `None` when the completion carries no message.
pub fn from_openai_response(response: &ChatCompletionResponse) -> Option<LlmResponse> {
    let choice = response.choices.first()?;
    let message = choice.message.as_ref()?;

    let content = message.content.as_ref().map(|text| Content::new("model").with_text(text));
    let usage_metadata = response.usage.as_ref().map(|u| UsageMetadata {
        prompt_token_count: u.prompt_tokens as i32,
        candidates_token_count: u.completion_tokens as i32,
        total_token_count: u.total_tokens as i32,
    });

    Some(LlmResponse {
        content,
        usage_metadata,
        finish_reason: choice.finish_reason.as_deref().map(convert_finish_reason),
    })
}
