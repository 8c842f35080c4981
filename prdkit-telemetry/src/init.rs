//! Subscriber initialization

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Bare levels accepted in a filter directive.
pub const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Options for [`init_telemetry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryOptions {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "warn", "prdkit_prd=debug").
    pub level: String,
    pub format: LogFormat,
}

impl Default for TelemetryOptions {
    fn default() -> Self {
        Self { level: "warn".to_string(), format: LogFormat::Plain }
    }
}

/// Build the filter: `RUST_LOG` wins, then the configured level, then "warn".
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Check a filter directive such as "warn" or "warn,prdkit_prd=debug".
///
/// Bare words must be one of [`LEVELS`]; `EnvFilter` would otherwise read them as
/// target names. `target=level` parts are checked by [`EnvFilter::try_new`].
pub fn validate_filter(directive: &str) -> Result<(), String> {
    if directive.trim().is_empty() {
        return Err("filter directive is empty".to_string());
    }
    for part in directive.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !part.contains('=') && !LEVELS.contains(&part) {
            return Err(format!("'{part}' is not a level or a target=level directive"));
        }
    }
    EnvFilter::try_new(directive).map(|_| ()).map_err(|e| e.to_string())
}

/// Install the global subscriber. Later calls are no-ops.
///
/// Logs go to stderr so that stdout stays clean for rendered documents.
///
/// # Example
/// ```
/// use prdkit_telemetry::{TelemetryOptions, init_telemetry};
/// init_telemetry("prdkit", &TelemetryOptions::default());
/// ```
pub fn init_telemetry(service_name: &str, options: &TelemetryOptions) {
    INIT.call_once(|| {
        let filter = env_filter(&options.level);
        let registry = tracing_subscriber::registry().with(filter);

        let installed = match options.format {
            LogFormat::Plain => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_line_number(true),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .try_init(),
        };

        if installed.is_ok() {
            tracing::debug!(service.name = service_name, format = %options.format, "telemetry initialized");
        }
    });
}
