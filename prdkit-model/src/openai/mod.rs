//! OpenAI provider implementation.
//!
//! Supports OpenAI and any OpenAI-compatible API (vLLM, Ollama, LM Studio) through
//! `base_url`. Requests carry a strict `json_schema` response format when the
//! [`prdkit_core::LlmRequest`] has a response schema attached.
//!
//! # Example
//!
//! ```rust,ignore
//! use prdkit_model::openai::{OpenAIClient, OpenAIConfig};
//!
//! let client = OpenAIClient::new(OpenAIConfig {
//!     api_key: std::env::var("OPENAI_API_KEY").unwrap(),
//!     model: "gpt-4.1-mini".to_string(),
//!     ..Default::default()
//! })?;
//! ```

mod client;
mod config;
pub(crate) mod convert;

pub use client::OpenAIClient;
pub use config::{DEFAULT_MODEL, OPENAI_API_BASE, OpenAIConfig};
