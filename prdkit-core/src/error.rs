//! Error types shared by every prdkit crate.

/// Maximum number of payload characters shown in [`PrdError`]'s `Display` output.
///
/// The full payload is always kept in the error value.
pub const PAYLOAD_DISPLAY_LIMIT: usize = 2000;

/// Result type alias for prdkit operations.
pub type Result<T> = std::result::Result<T, PrdError>;

/// Errors surfaced by the generation and evaluation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PrdError {
    /// Caller-supplied input failed a precondition. No service call was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The LLM service was unreachable or failed at the transport level.
    #[error("Service error: {0}")]
    Service(String),

    /// The service answered, but the payload does not match the expected schema.
    #[error("Schema violation: {message} (payload: {})", truncate_payload(.payload))]
    SchemaViolation { message: String, payload: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Discriminant of a [`PrdError`], used by callers to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Service,
    SchemaViolation,
    Config,
}

impl PrdError {
    /// Create an invalid-input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        PrdError::InvalidInput(msg.into())
    }

    /// Create a service error.
    pub fn service(msg: impl Into<String>) -> Self {
        PrdError::Service(msg.into())
    }

    /// Create a schema violation carrying the raw offending payload.
    pub fn schema_violation(msg: impl Into<String>, payload: impl Into<String>) -> Self {
        PrdError::SchemaViolation { message: msg.into(), payload: payload.into() }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        PrdError::Config(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PrdError::InvalidInput(_) => ErrorKind::InvalidInput,
            PrdError::Service(_) => ErrorKind::Service,
            PrdError::SchemaViolation { .. } => ErrorKind::SchemaViolation,
            PrdError::Config(_) => ErrorKind::Config,
        }
    }

    /// The raw payload of a schema violation, if this is one.
    pub fn payload(&self) -> Option<&str> {
        match self {
            PrdError::SchemaViolation { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

fn truncate_payload(payload: &str) -> String {
    match payload.char_indices().nth(PAYLOAD_DISPLAY_LIMIT) {
        Some((idx, _)) => format!("{}…", &payload[..idx]),
        None => payload.to_string(),
    }
}
