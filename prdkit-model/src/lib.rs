//! # prdkit-model
//!
//! LLM service clients for prdkit.
//!
//! ## Overview
//!
//! - [`OpenAIClient`] - OpenAI and OpenAI-compatible chat completions with
//!   schema-constrained (`json_schema`) output
//! - [`ModerationClient`] - the OpenAI moderations endpoint, behind the [`Moderator`] trait
//! - [`MockLlm`] - scripted model for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prdkit_model::openai::{OpenAIClient, OpenAIConfig};
//! use std::sync::Arc;
//!
//! let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
//! let model = OpenAIClient::new(OpenAIConfig::new(api_key, "gpt-4.1-mini")).unwrap();
//! let model: Arc<dyn prdkit_core::Llm> = Arc::new(model);
//! ```

pub mod mock;
pub mod moderation;
pub mod openai;

pub use mock::MockLlm;
pub use moderation::{DEFAULT_MODERATION_MODEL, ModerationClient, ModerationOutcome, Moderator};
pub use openai::{OpenAIClient, OpenAIConfig};
