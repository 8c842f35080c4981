//! # prdkit-cli
//!
//! The `prdkit` command: notes in, PRD (and optional evaluation) out.
//!
//! ```bash
//! prdkit generate --notes-file meeting.txt --evaluate --out-dir ./out
//! echo "We need a login page." | prdkit generate --format json
//! prdkit evaluate --prd-file ./out/prd.json --notes-file meeting.txt
//! prdkit config
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod pipeline;

pub use config::{PrdkitConfig, ValidationError};
pub use error::{InputBlocked, Presentation, present};
pub use pipeline::{Pipeline, RunOutput};
