use std::sync::Arc;

use serde::Deserialize;

/// Level at which formatted errors are forwarded to an external logger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
}

/// Sink that receives formatted error text
///
/// Implementations only need to handle `error`; loggers that also accept
/// `warn` or `info` advertise it through [`Logger::supports`].
pub trait Logger: Send + Sync {
    /// Emit `message` at `level`
    fn log(&self, level: LogLevel, message: &str);

    /// Whether this logger accepts messages at `level`
    fn supports(&self, level: LogLevel) -> bool {
        matches!(level, LogLevel::Error)
    }
}

/// An external logger bound to a fixed level
#[derive(Clone)]
pub struct LoggerBinding {
    pub(crate) logger: Arc<dyn Logger>,
    pub(crate) level: LogLevel,
}

impl LoggerBinding {
    /// Level messages are forwarded at
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    pub(crate) fn forward(&self, message: &str) {
        self.logger.log(self.level, message);
    }
}

impl std::fmt::Debug for LoggerBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBinding").field("level", &self.level).finish_non_exhaustive()
    }
}
