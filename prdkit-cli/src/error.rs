//! Mapping of failures to user-facing messages and exit codes.

use crate::config::ValidationError;
use prdkit_core::{ErrorKind, PAYLOAD_DISPLAY_LIMIT, PrdError};
use prdkit_guardrail::SafetyVerdict;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INVALID_INPUT: i32 = 2;
pub const EXIT_SCHEMA_VIOLATION: i32 = 3;
pub const EXIT_SERVICE: i32 = 4;
pub const EXIT_BLOCKED: i32 = 5;
pub const EXIT_CONFIG: i32 = 6;

/// Notes rejected by the safety gate.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{reason}")]
pub struct InputBlocked {
    pub reason: String,
    pub flags: Vec<String>,
}

impl From<SafetyVerdict> for InputBlocked {
    fn from(verdict: SafetyVerdict) -> Self {
        Self { reason: verdict.reason.unwrap_or_else(|| "Input was blocked.".to_string()), flags: verdict.flags }
    }
}

/// What to show the user for a failure, and the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub title: &'static str,
    pub lines: Vec<String>,
    pub exit_code: i32,
}

pub fn present(err: &anyhow::Error) -> Presentation {
    if let Some(e) = err.downcast_ref::<PrdError>() {
        return present_prd_error(e);
    }
    if let Some(e) = err.downcast_ref::<InputBlocked>() {
        let mut lines = vec![e.reason.clone()];
        if !e.flags.is_empty() {
            lines.push(format!("flags: {}", e.flags.join(", ")));
        }
        return Presentation { title: "Input blocked", lines, exit_code: EXIT_BLOCKED };
    }
    if let Some(e) = err.downcast_ref::<ValidationError>() {
        let mut lines = vec![format!("{}: {}", e.field, e.message)];
        if let Some(suggestion) = &e.suggestion {
            lines.push(format!("hint: {suggestion}"));
        }
        return Presentation { title: "Configuration error", lines, exit_code: EXIT_CONFIG };
    }
    Presentation {
        title: "Error",
        lines: err.chain().map(ToString::to_string).collect(),
        exit_code: EXIT_FAILURE,
    }
}

fn present_prd_error(err: &PrdError) -> Presentation {
    let exit_code = exit_code_for(err.kind());
    match err {
        PrdError::InvalidInput(message) => Presentation {
            title: "Invalid input",
            lines: vec![format!("Please add notes first ({message}).")],
            exit_code,
        },
        PrdError::SchemaViolation { message, payload } => Presentation {
            title: "Unexpected model output",
            lines: vec![
                format!("The model response did not match the expected shape: {message}"),
                "payload:".to_string(),
                truncate(payload),
            ],
            exit_code,
        },
        PrdError::Service(message) => Presentation {
            title: "Model service unavailable",
            lines: vec![message.clone(), "Please retry in a moment.".to_string()],
            exit_code,
        },
        PrdError::Config(message) => Presentation {
            title: "Configuration error",
            lines: vec![message.clone()],
            exit_code,
        },
    }
}

fn truncate(payload: &str) -> String {
    match payload.char_indices().nth(PAYLOAD_DISPLAY_LIMIT) {
        Some((end, _)) => format!("{}... [truncated]", &payload[..end]),
        None => payload.to_string(),
    }
}

/// Exit code for an error kind.
pub fn exit_code_for(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::InvalidInput => EXIT_INVALID_INPUT,
        ErrorKind::SchemaViolation => EXIT_SCHEMA_VIOLATION,
        ErrorKind::Service => EXIT_SERVICE,
        ErrorKind::Config => EXIT_CONFIG,
    }
}
