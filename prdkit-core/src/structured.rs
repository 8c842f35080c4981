//! Parsing of structured (JSON) model output.
//!
//! Providers with schema-constrained output return bare JSON. Providers without it often
//! wrap the same JSON in a Markdown code fence, which is the only envelope accepted here.
//! Anything else that fails to deserialize is reported as
//! [`PrdError::SchemaViolation`] with the untouched payload attached.

use crate::{PrdError, Result};
use serde::de::DeserializeOwned;

/// Parse `raw` model output into `T`, validating it against `T`'s serde schema.
pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return Err(PrdError::schema_violation("response is empty", raw));
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| PrdError::schema_violation(format!("response is not valid JSON: {e}"), raw))?;

    if !value.is_object() {
        return Err(PrdError::schema_violation(
            format!("expected a JSON object, got {}", json_type_name(&value)),
            raw,
        ));
    }

    serde_json::from_value(value).map_err(|e| PrdError::schema_violation(e.to_string(), raw))
}

/// Remove a surrounding ```` ``` ```` / ```` ```json ```` fence, if present.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening line.
    match rest.find('\n') {
        Some(newline) => rest[newline + 1..].trim(),
        None => rest.trim(),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
