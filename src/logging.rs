//! Logging configuration and initialization
//!
//! Logs always go to stderr; stdout is reserved for the result line.

use std::env;

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Human,
        }
    }
}

impl LoggingConfig {
    /// Read `ROLL_LOG_LEVEL` and `ROLL_LOG_FORMAT`, falling back to the defaults
    pub fn from_env() -> Self {
        let level = env::var("ROLL_LOG_LEVEL")
            .ok()
            .and_then(|value| value.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let format = match env::var("ROLL_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Human,
        };

        Self { level, format }
    }
}

/// Initialize structured logging with the given configuration
pub fn init_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Human => {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr);
            registry
                .with(fmt_layer)
                .try_init()
                .context("failed to install log subscriber")?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(fmt::format::FmtSpan::CLOSE)
                .with_writer(std::io::stderr);
            registry
                .with(fmt_layer)
                .try_init()
                .context("failed to install log subscriber")?;
        }
    }

    Ok(())
}

/// Initialize logging with environment-based configuration
pub fn init_from_env() -> anyhow::Result<()> {
    init_logging(LoggingConfig::from_env())
}
