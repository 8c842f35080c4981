//! Configuration loaded from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `OPENAI_API_KEY` | required |
//! | `PRDKIT_BASE_URL` | `https://api.openai.com/v1` |
//! | `PRDKIT_MODEL` | `gpt-4.1-mini` |
//! | `PRDKIT_GENERATOR_TEMPERATURE` | `0.2` |
//! | `PRDKIT_EVALUATOR_TEMPERATURE` | `0.1` |
//! | `PRDKIT_MAX_OUTPUT_TOKENS` | provider default |
//! | `PRDKIT_MODERATION` | `true` |
//! | `PRDKIT_LOG_LEVEL` | `warn` (a level or filter directives like `warn,prdkit_prd=debug`) |
//! | `PRDKIT_LOG_FORMAT` | `plain` |

use prdkit_eval::{DEFAULT_EVALUATOR_TEMPERATURE, EvaluatorConfig};
use prdkit_model::openai::{DEFAULT_MODEL, OPENAI_API_BASE};
use prdkit_model::OpenAIConfig;
use prdkit_prd::{DEFAULT_GENERATOR_TEMPERATURE, GeneratorConfig};
use prdkit_telemetry::{LEVELS, LogFormat, TelemetryOptions, validate_filter};

/// Highest sampling temperature accepted by OpenAI-compatible APIs.
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Validation error with context and suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Description of the error
    pub message: String,
    /// Suggested fix or valid values
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), suggestion: None }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::error::Error for ValidationError {}

/// Effective prdkit configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PrdkitConfig {
    pub api_key: String,
    pub base_url: String,
    /// Model used for both generation and evaluation.
    pub model: String,
    pub generator_temperature: f32,
    pub evaluator_temperature: f32,
    pub max_output_tokens: Option<i32>,
    /// Send notes to the moderation endpoint before generating.
    pub moderation: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for PrdkitConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: OPENAI_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            generator_temperature: DEFAULT_GENERATOR_TEMPERATURE,
            evaluator_temperature: DEFAULT_EVALUATOR_TEMPERATURE,
            max_output_tokens: None,
            moderation: true,
            log_level: "warn".to_string(),
            log_format: LogFormat::Plain,
        }
    }
}

impl PrdkitConfig {
    /// Load from process environment variables and validate.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup and validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(key) = get("OPENAI_API_KEY") {
            config.api_key = key;
        }
        if let Some(url) = get("PRDKIT_BASE_URL") {
            config.base_url = url;
        }
        if let Some(model) = get("PRDKIT_MODEL") {
            config.model = model;
        }
        if let Some(raw) = get("PRDKIT_GENERATOR_TEMPERATURE") {
            config.generator_temperature = parse_temperature("generator_temperature", &raw)?;
        }
        if let Some(raw) = get("PRDKIT_EVALUATOR_TEMPERATURE") {
            config.evaluator_temperature = parse_temperature("evaluator_temperature", &raw)?;
        }
        if let Some(raw) = get("PRDKIT_MAX_OUTPUT_TOKENS") {
            let tokens = raw.parse::<i32>().map_err(|_| {
                ValidationError::new("max_output_tokens", format!("'{raw}' is not a whole number"))
                    .with_suggestion("Use a positive integer such as 4096, or unset it")
            })?;
            config.max_output_tokens = Some(tokens);
        }
        if let Some(raw) = get("PRDKIT_MODERATION") {
            config.moderation = parse_bool(&raw).ok_or_else(|| {
                ValidationError::new("moderation", format!("'{raw}' is not a boolean"))
                    .with_suggestion("Use true or false")
            })?;
        }
        if let Some(level) = get("PRDKIT_LOG_LEVEL") {
            config.log_level = level.to_lowercase();
        }
        if let Some(raw) = get("PRDKIT_LOG_FORMAT") {
            config.log_format = raw.parse().map_err(|e: String| {
                ValidationError::new("log_format", e).with_suggestion("Use plain or json")
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(
        mut self,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ValidationError> {
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ValidationError::new("api_key", "OPENAI_API_KEY is not set")
                .with_suggestion("Export OPENAI_API_KEY or add it to a .env file"));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::new(
                "base_url",
                format!("'{}' is not an http(s) URL", self.base_url),
            )
            .with_suggestion(format!("Use a URL like {OPENAI_API_BASE}")));
        }

        if self.model.trim().is_empty() {
            return Err(ValidationError::new("model", "Model name cannot be empty")
                .with_suggestion(format!("Specify a model such as '{DEFAULT_MODEL}'")));
        }

        check_temperature("generator_temperature", self.generator_temperature)?;
        check_temperature("evaluator_temperature", self.evaluator_temperature)?;

        if matches!(self.max_output_tokens, Some(tokens) if tokens <= 0) {
            return Err(ValidationError::new(
                "max_output_tokens",
                "Max output tokens must be greater than 0",
            )
            .with_suggestion("Set at least 1 (recommended: 4096 or higher), or unset it"));
        }

        if let Err(reason) = validate_filter(&self.log_level) {
            return Err(ValidationError::new(
                "log_level",
                format!("Invalid log filter '{}': {reason}", self.log_level),
            )
            .with_suggestion(format!(
                "Use one of {}, or directives like 'warn,prdkit_prd=debug'",
                LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// The API key with everything but its edges hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len().max(4));
        }
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }

    pub fn openai(&self) -> OpenAIConfig {
        OpenAIConfig::compatible(&self.api_key, &self.base_url, &self.model)
    }

    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            temperature: self.generator_temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }

    pub fn evaluator(&self) -> EvaluatorConfig {
        EvaluatorConfig {
            temperature: self.evaluator_temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }

    /// Telemetry options, with `-v` occurrences raising the level.
    pub fn telemetry(&self, verbose: u8) -> TelemetryOptions {
        let level = match verbose {
            0 => self.log_level.clone(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        };
        TelemetryOptions { level, format: self.log_format }
    }
}

fn parse_temperature(field: &str, raw: &str) -> Result<f32, ValidationError> {
    raw.parse::<f32>().map_err(|_| {
        ValidationError::new(field, format!("'{raw}' is not a number"))
            .with_suggestion(format!("Use a value between 0.0 and {MAX_TEMPERATURE}"))
    })
}

fn check_temperature(field: &str, value: f32) -> Result<(), ValidationError> {
    if !value.is_finite() || !(0.0..=MAX_TEMPERATURE).contains(&value) {
        return Err(ValidationError::new(
            field,
            format!("Temperature {value} is outside 0.0..={MAX_TEMPERATURE}"),
        )
        .with_suggestion(format!("Use a value between 0.0 and {MAX_TEMPERATURE}")));
    }
    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
