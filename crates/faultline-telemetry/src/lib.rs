//! Logging for faultline
//!
//! Installs the `tracing` subscriber and provides a [`Logger`] that routes
//! forwarded error reports into it.

use std::sync::Arc;

use faultline_config::{LogFormat, LoggingConfig};
use faultline_core::{LogLevel, Logger, Reporter};
use tracing_subscriber::EnvFilter;

/// Target used for forwarded error reports
pub const REPORT_TARGET: &str = "faultline::report";

/// [`Logger`] that emits forwarded reports as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => tracing::error!(target: REPORT_TARGET, "{message}"),
            LogLevel::Warn => tracing::warn!(target: REPORT_TARGET, "{message}"),
            LogLevel::Info => tracing::info!(target: REPORT_TARGET, "{message}"),
        }
    }

    fn supports(&self, _level: LogLevel) -> bool {
        true
    }
}

/// Initialize the global `tracing` subscriber from configuration
///
/// Invalid filter directives fall back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}

/// Bind [`TracingLogger`] to `reporter` when forwarding is configured
///
/// # Errors
///
/// Returns an error if the reporter rejects the logger binding
pub fn bind_forwarding(reporter: &mut Reporter, config: &LoggingConfig) -> anyhow::Result<()> {
    if let Some(level) = config.forward {
        reporter.set_logger(Arc::new(TracingLogger), level)?;
    }

    Ok(())
}
