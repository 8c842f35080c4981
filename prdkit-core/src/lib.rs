//! # prdkit-core
//!
//! Core traits and types shared by the prdkit crates.
//!
//! ## Overview
//!
//! - [`Llm`] - the boundary to a large-language-model service
//! - [`LlmRequest`] / [`LlmResponse`] - what crosses that boundary
//! - [`PrdError`] / [`Result`] - the error taxonomy surfaced to callers
//! - [`parse_structured`] - strict parsing of JSON model output
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use prdkit_core::{Content, Llm, LlmRequest};
//!
//! let request = LlmRequest::new(model.name(), vec![Content::user("Hello")])
//!     .with_response_schema("greeting", schema);
//! let response = model.generate_content(request).await?;
//! ```

pub mod error;
pub mod model;
pub mod structured;
pub mod types;

pub use error::{ErrorKind, PAYLOAD_DISPLAY_LIMIT, PrdError, Result};
pub use model::{FinishReason, GenerateContentConfig, Llm, LlmRequest, LlmResponse, UsageMetadata};
pub use structured::parse_structured;
pub use types::{Content, Part};
