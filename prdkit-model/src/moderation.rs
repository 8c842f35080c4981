//! Content moderation through the OpenAI moderations endpoint.

use crate::openai::OpenAIConfig;
use async_trait::async_trait;
use prdkit_core::{PrdError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Moderation model used unless overridden.
pub const DEFAULT_MODERATION_MODEL: &str = "omni-moderation-latest";

/// Verdict of a moderation service for one input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModerationOutcome {
    /// Whether the input was flagged.
    pub flagged: bool,
    /// Names of the categories that triggered, sorted.
    pub categories: Vec<String>,
}

/// A service that classifies free text as acceptable or not.
#[async_trait]
pub trait Moderator: Send + Sync {
    async fn moderate(&self, text: &str) -> Result<ModerationOutcome>;
}

#[derive(Debug, Serialize)]
struct ModerationRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ModerationResponse {
    #[serde(default)]
    results: Vec<ModerationResult>,
}

#[derive(Debug, Deserialize)]
struct ModerationResult {
    flagged: bool,
    #[serde(default)]
    categories: BTreeMap<String, bool>,
}

/// Client for `POST {base_url}/moderations`.
pub struct ModerationClient {
    client: Client,
    config: OpenAIConfig,
    model: String,
}

impl ModerationClient {
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| PrdError::config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client, config, model: DEFAULT_MODERATION_MODEL.to_string() })
    }

    /// Use a different moderation model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl Moderator for ModerationClient {
    async fn moderate(&self, text: &str) -> Result<ModerationOutcome> {
        let url = format!("{}/moderations", self.config.effective_base_url());
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&ModerationRequest { model: &self.model, input: text })
            .send()
            .await
            .map_err(|e| PrdError::service(format!("Moderation request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PrdError::service(format!("Moderation API error ({status}): {error_text}")));
        }

        let body: ModerationResponse = response
            .json()
            .await
            .map_err(|e| PrdError::service(format!("Failed to decode moderation response: {e}")))?;

        let result = body
            .results
            .into_iter()
            .next()
            .ok_or_else(|| PrdError::service("Moderation API returned no results"))?;

        let categories = result
            .categories
            .into_iter()
            .filter_map(|(name, hit)| hit.then_some(name))
            .collect();

        Ok(ModerationOutcome { flagged: result.flagged, categories })
    }
}
