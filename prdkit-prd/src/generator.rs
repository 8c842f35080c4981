//! Notes → PRD generation.

use crate::prd::Prd;
use crate::prompts::{SYSTEM_PROMPT, user_prompt};
use crate::schema::{PRD_SCHEMA_NAME, prd_json_schema};
use prdkit_core::{Content, GenerateContentConfig, Llm, LlmRequest, PrdError, Result};
use prdkit_telemetry::{generate_span, model_call_span};
use std::sync::Arc;
use tracing::{Instrument, debug, info, warn};

/// Default sampling temperature for generation.
pub const DEFAULT_GENERATOR_TEMPERATURE: f32 = 0.2;

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub temperature: f32,
    /// Upper bound on completion tokens; provider default when `None`.
    pub max_output_tokens: Option<i32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { temperature: DEFAULT_GENERATOR_TEMPERATURE, max_output_tokens: None }
    }
}

/// Turns free-form notes into a [`Prd`] with one schema-constrained model call.
pub struct PrdGenerator {
    llm: Arc<dyn Llm>,
    config: GeneratorConfig,
}

impl PrdGenerator {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm, config: GeneratorConfig::default() }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a PRD from `notes`.
    ///
    /// Blank notes fail with [`PrdError::InvalidInput`] before the model is contacted.
    /// Otherwise exactly one request is made and its output is accepted only if it is a
    /// complete PRD; anything else is [`PrdError::SchemaViolation`].
    pub async fn generate(&self, notes: &str) -> Result<Prd> {
        generate_with(self.llm.as_ref(), &self.config, notes).await
    }
}

/// Generate a PRD with the default [`GeneratorConfig`].
pub async fn generate_prd(llm: &dyn Llm, notes: &str) -> Result<Prd> {
    generate_with(llm, &GeneratorConfig::default(), notes).await
}

/// Build the request sent for `notes`.
pub fn build_request(model: &str, config: &GeneratorConfig, notes: &str) -> LlmRequest {
    LlmRequest::new(model, vec![Content::system(SYSTEM_PROMPT), Content::user(user_prompt(notes))])
        .with_response_schema(PRD_SCHEMA_NAME, prd_json_schema())
        .with_config(GenerateContentConfig {
            temperature: Some(config.temperature),
            max_output_tokens: config.max_output_tokens,
            ..Default::default()
        })
}

async fn generate_with(llm: &dyn Llm, config: &GeneratorConfig, notes: &str) -> Result<Prd> {
    if notes.trim().is_empty() {
        return Err(PrdError::invalid_input("notes are empty"));
    }

    let span = generate_span(llm.name(), notes.len());
    async move {
        let request = build_request(llm.name(), config, notes);
        debug!(notes_len = notes.len(), "requesting PRD");

        let response = llm
            .generate_content(request)
            .instrument(model_call_span(llm.name(), PRD_SCHEMA_NAME))
            .await?;

        let prd = Prd::from_json(&response.text()).inspect_err(|e| {
            warn!(error = %e, "model output is not a valid PRD");
        })?;

        info!(
            goals = prd.goals().len(),
            user_stories = prd.user_stories().len(),
            open_questions = prd.open_questions().len(),
            "PRD generated"
        );
        Ok(prd)
    }
    .instrument(span)
    .await
}
