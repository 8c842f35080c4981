//! # prdkit-prd
//!
//! Turns unstructured business notes into a structured Product Requirements Document.
//!
//! ## Overview
//!
//! - [`Prd`] - the immutable eight-field document
//! - [`PrdGenerator`] / [`generate_prd`] - one schema-constrained model call per document
//! - [`render`] - plain-text and Markdown renderings
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use prdkit_prd::PrdGenerator;
//!
//! let generator = PrdGenerator::new(llm.clone());
//! let prd = generator.generate("We need a login page. Users forget passwords a lot.").await?;
//! println!("{}", prdkit_prd::render::markdown(&prd));
//! ```

pub mod generator;
pub mod prd;
pub mod prompts;
pub mod render;
pub mod schema;

pub use generator::{DEFAULT_GENERATOR_TEMPERATURE, GeneratorConfig, PrdGenerator, generate_prd};
pub use prd::{PRD_FIELDS, Prd};
pub use schema::{PRD_SCHEMA_NAME, prd_json_schema};
