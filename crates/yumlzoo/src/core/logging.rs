//! Logging infrastructure for diagram processing
//!
//! Structured logging uses the `tracing` crate. Events are written to stderr
//! so that reports printed on stdout stay machine-readable.
//!
//! # Usage
//!
//! ```rust,no_run
//! use yumlzoo::core::logging::init_logging;
//!
//! // Initialize with default settings
//! init_logging(None, None).unwrap();
//! ```
//!
//! # Log Levels
//!
//! - `trace`: Per-line parser narration (raw tokens, classification)
//! - `debug`: Per-diagram results
//! - `info`: Corpus-level progress (default)
//! - `warn`: Skipped or degraded inputs, e.g. cyclic inheritance
//! - `error`: Error messages
//!
//! # Log Formats
//!
//! - `compact`: Single-line format, good for production
//! - `pretty`: Multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `YUMLZOO_LOG_LEVEL`: Set log level (trace|debug|info|warn|error)
//! - `RUST_LOG`: Alternative way to set log level (tracing-subscriber standard)
//! - `YUMLZOO_LOG_FORMAT`: Set log format (compact|pretty|json)
//!
//! # Filtering Logs
//!
//! ```bash
//! # Watch every line the parser classifies
//! RUST_LOG="yumlzoo::plugins::yuml=trace" yumlzoo parse --input Make.yuml
//!
//! # Corpus progress only, with per-diagram statistics
//! RUST_LOG="info,yumlzoo::stats=debug" yumlzoo summary --zoo dataset/zoo
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

const LEVEL_VAR: &str = "YUMLZOO_LOG_LEVEL";
const FORMAT_VAR: &str = "YUMLZOO_LOG_FORMAT";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact single-line format
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Level directive and format after explicit values and environment are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// An `EnvFilter` directive such as `info` or `warn,yumlzoo::stats=debug`
    pub directive: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Explicit values win, then `YUMLZOO_LOG_LEVEL` / `RUST_LOG` and
    /// `YUMLZOO_LOG_FORMAT`, then `info` and compact
    pub fn resolve(level: Option<&str>, format: Option<&str>) -> Result<Self, String> {
        Self::resolve_with(level, format, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        level: Option<&str>,
        format: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let directive = level
            .map(str::to_string)
            .or_else(|| env(LEVEL_VAR))
            .or_else(|| env("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());

        let format = match format.map(str::to_string).or_else(|| env(FORMAT_VAR)) {
            Some(name) => {
                LogFormat::from_str(&name).map_err(|e| format!("Invalid log format: {}", e))?
            }
            None => LogFormat::default(),
        };

        Ok(Self { directive, format })
    }

    /// Filter for the directive; an unparsable directive falls back to `info`
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.directive).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// # Arguments
///
/// * `level` - Optional log level directive (trace|debug|info|warn|error|off).
///            If None, uses `YUMLZOO_LOG_LEVEL` or `RUST_LOG`, or defaults to `info`.
/// * `format` - Optional log format (compact|pretty|json).
///             If None, uses `YUMLZOO_LOG_FORMAT`, or defaults to `compact`.
///
/// # Returns
///
/// Returns an error if the format is unknown or a subscriber is already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = LogSettings::resolve(level, format)?;

    let layer = fmt::layer().with_writer(std::io::stderr);
    let layer = match settings.format {
        LogFormat::Compact => layer
            .compact()
            .with_target(false)
            .with_span_events(FmtSpan::NONE)
            .boxed(),
        LogFormat::Pretty => layer
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::ACTIVE)
            .boxed(),
        LogFormat::Json => layer
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    };

    Registry::default()
        .with(layer)
        .with(settings.filter())
        .try_init()?;

    Ok(())
}

/// Initialize logging with default settings (info level, compact format)
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
