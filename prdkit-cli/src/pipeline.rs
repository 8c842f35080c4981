//! Runs the generate and evaluate stages for the CLI.

use crate::error::InputBlocked;
use anyhow::{Context, Result};
use prdkit_core::{Llm, PrdError};
use prdkit_eval::{Evaluation, EvaluatorConfig, PrdEvaluator};
use prdkit_guardrail::SafetyGuard;
use prdkit_prd::{GeneratorConfig, Prd, PrdGenerator};
use std::future::Future;
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Result of one CLI run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub prd: Prd,
    pub evaluation: Option<Evaluation>,
}

/// The two pipeline stages sharing one model client, plus the input gate.
pub struct Pipeline {
    generator: PrdGenerator,
    evaluator: PrdEvaluator,
    guard: SafetyGuard,
    timeout: Option<Duration>,
}

impl Pipeline {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self {
            generator: PrdGenerator::new(llm.clone()),
            evaluator: PrdEvaluator::new(llm),
            guard: SafetyGuard::new(),
            timeout: None,
        }
    }

    pub fn with_generator_config(mut self, config: GeneratorConfig) -> Self {
        self.generator = self.generator.with_config(config);
        self
    }

    pub fn with_evaluator_config(mut self, config: EvaluatorConfig) -> Self {
        self.evaluator = self.evaluator.with_config(config);
        self
    }

    pub fn with_guard(mut self, guard: SafetyGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Bound each model call; an expired call is reported as a service error.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Notes → PRD, and optionally → Evaluation.
    ///
    /// Blank notes are [`PrdError::InvalidInput`] whether or not the safety gate runs.
    pub async fn generate(&self, notes: &str, evaluate: bool, skip_safety: bool) -> Result<RunOutput> {
        if notes.trim().is_empty() {
            return Err(PrdError::invalid_input("notes are empty").into());
        }
        if !skip_safety {
            let verdict = self.guard.check(notes).await;
            if verdict.is_blocked() {
                return Err(InputBlocked::from(verdict).into());
            }
        }

        let prd = self.bounded(self.generator.generate(notes)).await?;
        let evaluation = if evaluate {
            Some(self.bounded(self.evaluator.evaluate_with_notes(&prd, Some(notes))).await?)
        } else {
            None
        };
        info!(evaluated = evaluation.is_some(), "run complete");
        Ok(RunOutput { prd, evaluation })
    }

    /// Score an existing PRD.
    pub async fn evaluate(&self, prd: Prd, notes: Option<&str>) -> Result<RunOutput> {
        let evaluation = self.bounded(self.evaluator.evaluate_with_notes(&prd, notes)).await?;
        Ok(RunOutput { prd, evaluation: Some(evaluation) })
    }

    async fn bounded<T>(&self, call: impl Future<Output = prdkit_core::Result<T>>) -> prdkit_core::Result<T> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                PrdError::service(format!("model call timed out after {}s", limit.as_secs()))
            })?,
            None => call.await,
        }
    }
}

/// Notes from `--notes`, `--notes-file`, or piped stdin, in that order.
///
/// An interactive terminal on stdin yields empty notes rather than blocking.
pub fn read_notes(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(notes) = inline {
        return Ok(notes.to_string());
    }
    if let Some(path) = file {
        return read_file(path);
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut notes = String::new();
    stdin.lock().read_to_string(&mut notes).context("Failed to read notes from stdin")?;
    Ok(notes)
}

/// Load a PRD previously exported as JSON.
pub fn read_prd(path: &Path) -> Result<Prd> {
    let raw = read_file(path)?;
    Prd::from_json(&raw).map_err(|e| match e {
        PrdError::SchemaViolation { message, .. } => {
            anyhow::anyhow!("{} is not a valid PRD file: {message}", path.display())
        }
        other => other.into(),
    })
}

pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
