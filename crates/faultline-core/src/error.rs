use http::StatusCode;
use thiserror::Error;

use crate::logger::LogLevel;

/// Trait for domain errors that can be converted to HTTP responses
///
/// The server layer converts these into actual HTTP responses, keeping
/// domain errors decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `Client Error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Invalid reporter configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The logger cannot receive messages at the requested level
    #[error("external logger must provide a `{0}` method")]
    MissingLoggerMethod(LogLevel),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_method_names_the_level() {
        let err = ConfigError::MissingLoggerMethod(LogLevel::Warn);
        assert_eq!(err.to_string(), "external logger must provide a `warn` method");
    }
}
