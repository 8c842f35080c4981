//! PRD → Evaluation scoring.

use crate::evaluation::Evaluation;
use crate::prompts::{SYSTEM_PROMPT, user_prompt};
use crate::schema::{EVALUATION_SCHEMA_NAME, evaluation_json_schema};
use prdkit_core::{Content, GenerateContentConfig, Llm, LlmRequest, Result};
use prdkit_prd::Prd;
use prdkit_telemetry::{evaluate_span, model_call_span};
use std::sync::Arc;
use tracing::{Instrument, debug, info, warn};

/// Default sampling temperature for evaluation.
pub const DEFAULT_EVALUATOR_TEMPERATURE: f32 = 0.1;

/// Evaluation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorConfig {
    pub temperature: f32,
    pub max_output_tokens: Option<i32>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self { temperature: DEFAULT_EVALUATOR_TEMPERATURE, max_output_tokens: None }
    }
}

/// LLM judge that scores a [`Prd`] with one schema-constrained call.
pub struct PrdEvaluator {
    llm: Arc<dyn Llm>,
    config: EvaluatorConfig,
}

impl PrdEvaluator {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm, config: EvaluatorConfig::default() }
    }

    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Score `prd`.
    pub async fn evaluate(&self, prd: &Prd) -> Result<Evaluation> {
        evaluate_with(self.llm.as_ref(), &self.config, prd, None).await
    }

    /// Score `prd`, showing the reviewer the notes it was generated from so omissions
    /// can be called out.
    pub async fn evaluate_with_notes(&self, prd: &Prd, original_notes: Option<&str>) -> Result<Evaluation> {
        evaluate_with(self.llm.as_ref(), &self.config, prd, original_notes).await
    }
}

/// Score `prd` with the default [`EvaluatorConfig`].
pub async fn evaluate_prd(llm: &dyn Llm, prd: &Prd) -> Result<Evaluation> {
    evaluate_with(llm, &EvaluatorConfig::default(), prd, None).await
}

pub fn build_request(
    model: &str,
    config: &EvaluatorConfig,
    prd: &Prd,
    original_notes: Option<&str>,
) -> LlmRequest {
    LlmRequest::new(
        model,
        vec![Content::system(SYSTEM_PROMPT), Content::user(user_prompt(prd, original_notes))],
    )
    .with_response_schema(EVALUATION_SCHEMA_NAME, evaluation_json_schema())
    .with_config(GenerateContentConfig {
        temperature: Some(config.temperature),
        max_output_tokens: config.max_output_tokens,
        ..Default::default()
    })
}

async fn evaluate_with(
    llm: &dyn Llm,
    config: &EvaluatorConfig,
    prd: &Prd,
    original_notes: Option<&str>,
) -> Result<Evaluation> {
    let span = evaluate_span(llm.name(), original_notes.is_some());
    async move {
        if prd.is_empty() {
            debug!("evaluating an empty PRD");
        }
        let request = build_request(llm.name(), config, prd, original_notes);

        let response = llm
            .generate_content(request)
            .instrument(model_call_span(llm.name(), EVALUATION_SCHEMA_NAME))
            .await?;

        let evaluation = Evaluation::from_model_output(&response.text()).inspect_err(|e| {
            warn!(error = %e, "model output is not a valid evaluation");
        })?;

        info!(overall_score = evaluation.overall_score(), "PRD evaluated");
        Ok(evaluation)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request() {
        let prd = Prd::new("Users forget passwords.");
        let request = build_request("m", &EvaluatorConfig::default(), &prd, Some("notes here"));

        assert_eq!(request.contents[0].text(), SYSTEM_PROMPT);
        assert!(request.contents[1].text().contains("Users forget passwords."));
        assert!(request.contents[1].text().contains("notes here"));

        let config = request.config.as_ref().unwrap();
        assert_eq!(config.temperature, Some(0.1));
        assert_eq!(config.response_schema_name.as_deref(), Some(EVALUATION_SCHEMA_NAME));
    }
}
