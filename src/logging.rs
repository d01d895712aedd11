//! Logging System
//!
//! Structured logging using the `tracing` crate. Progress lines (directories
//! processed, bundles written) are ordinary `info` events, so the default
//! configuration prints them to stdout as text.

use crate::error::BundleError;
use std::io::IsTerminal;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Full filter directive, e.g. `pagebundle=debug`
pub const LOG_ENV: &str = "PAGEBUNDLE_LOG";
pub const LOG_FORMAT_ENV: &str = "PAGEBUNDLE_LOG_FORMAT";
pub const LOG_OUTPUT_ENV: &str = "PAGEBUNDLE_LOG_OUTPUT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// When false no subscriber is installed
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text (default: text)
    pub format: String,

    /// Output destination: stdout, stderr
    pub output: String,

    /// Enable colored output (text format only, and only when the output is a terminal)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            format: "text".to_string(),
            output: "stdout".to_string(),
            color: true,
        }
    }
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
}

impl Output {
    fn is_terminal(self) -> bool {
        match self {
            Output::Stdout => std::io::stdout().is_terminal(),
            Output::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (PAGEBUNDLE_LOG, PAGEBUNDLE_LOG_FORMAT, PAGEBUNDLE_LOG_OUTPUT)
/// 2. The given config, already merged with CLI flags
/// 3. Defaults
pub fn init_logging(config: &LoggingConfig) -> Result<(), BundleError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = resolve_format(std::env::var(LOG_FORMAT_ENV).ok().as_deref(), config)?;
    let output = resolve_output(std::env::var(LOG_OUTPUT_ENV).ok().as_deref(), config)?;
    let use_color = config.color && output.is_terminal();

    let writer = match output {
        Output::Stdout => BoxMakeWriter::new(std::io::stdout),
        Output::Stderr => BoxMakeWriter::new(std::io::stderr),
    };

    let base_subscriber = Registry::default().with(filter);

    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| BundleError::Logging(format!("Failed to install subscriber: {}", e)))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, BundleError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    parse_level(&config.level)?;
    Ok(EnvFilter::new(config.level.as_str()))
}

fn parse_level(level: &str) -> Result<(), BundleError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
        other => Err(BundleError::Logging(format!(
            "Invalid log level: {} (must be trace, debug, info, warn, error or off)",
            other
        ))),
    }
}

/// Output format: the environment value when set, otherwise the config.
/// Either source is rejected when invalid.
fn resolve_format(env_value: Option<&str>, config: &LoggingConfig) -> Result<String, BundleError> {
    let format = env_value.unwrap_or(config.format.as_str());
    match format {
        "json" | "text" => Ok(format.to_string()),
        other => Err(BundleError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

/// Output destination: the environment value when set, otherwise the config.
fn resolve_output(env_value: Option<&str>, config: &LoggingConfig) -> Result<Output, BundleError> {
    parse_output(env_value.unwrap_or(config.output.as_str()))
}

fn parse_output(output: &str) -> Result<Output, BundleError> {
    match output {
        "stdout" => Ok(Output::Stdout),
        "stderr" => Ok(Output::Stderr),
        _ => Err(BundleError::Logging(format!(
            "Invalid log output: {} (must be 'stdout' or 'stderr')",
            output
        ))),
    }
}
