//! # prdkit-telemetry
//!
//! Structured logging for prdkit using `tracing`.
//!
//! ## Usage
//!
//! ```rust
//! use prdkit_telemetry::{TelemetryOptions, init_telemetry, info};
//!
//! init_telemetry("prdkit", &TelemetryOptions::default());
//! info!("pipeline started");
//! ```

pub mod init;
pub mod spans;

// Re-export tracing macros for convenience
pub use tracing::{Span, debug, error, info, instrument, trace, warn};

pub use init::{LEVELS, LogFormat, TelemetryOptions, init_telemetry, validate_filter};
pub use spans::*;
