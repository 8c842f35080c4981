//! Span helpers for pipeline stages
//!
//! Each stage of a run gets its own span so that model calls nest under the
//! stage that issued them.

use tracing::Span;

/// Create a span for PRD generation
///
/// # Example
/// ```
/// use prdkit_telemetry::generate_span;
/// let span = generate_span("gpt-4.1-mini", 512);
/// let _enter = span.enter();
/// ```
pub fn generate_span(model_name: &str, notes_len: usize) -> Span {
    tracing::info_span!("prd.generate", model.name = model_name, notes.len = notes_len)
}

/// Create a span for PRD evaluation
pub fn evaluate_span(model_name: &str, with_notes: bool) -> Span {
    tracing::info_span!("prd.evaluate", model.name = model_name, notes.attached = with_notes)
}

/// Create a span for a single model API call
///
/// # Example
/// ```
/// use prdkit_telemetry::model_call_span;
/// let span = model_call_span("gpt-4.1-mini", "prd_schema");
/// let _enter = span.enter();
/// ```
pub fn model_call_span(model_name: &str, schema_name: &str) -> Span {
    tracing::info_span!("model.call", model.name = model_name, schema.name = schema_name)
}

/// Create a span for the input safety gate
pub fn safety_check_span(input_len: usize) -> Span {
    tracing::debug_span!("safety.check", input.len = input_len)
}
