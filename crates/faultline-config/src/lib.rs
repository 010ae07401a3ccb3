#![allow(clippy::must_use_candidate)]

pub mod logging;
mod loader;
pub mod server;

use faultline_core::DisplaySettings;
use serde::Deserialize;

pub use logging::*;
pub use server::*;

/// Top-level faultline configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Defaults for formatting and console reports
    #[serde(default)]
    pub display: DisplaySettings,
    /// Log output and external logger forwarding
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Demo server configuration
    #[serde(default)]
    pub server: ServerConfig,
}
