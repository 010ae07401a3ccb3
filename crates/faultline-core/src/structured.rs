use std::backtrace::Backtrace;

use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::HttpError;
use crate::catalog;

/// Free-form structured context attached to an error
pub type Details = serde_json::Map<String, Value>;

/// Status code used when none (or an unusable one) is supplied
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// Message used when an error-like object carries no usable message
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Object keys searched, in order, for the message of an error-like object
const MESSAGE_KEYS: [&str; 3] = ["message", "msg", "error"];

/// Closed set of error variants, each with a fixed display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::EnumIter)]
pub enum ErrorKind {
    #[strum(serialize = "StructuredError")]
    Structured,
    #[strum(serialize = "BadRequestError")]
    BadRequest,
    #[strum(serialize = "UnauthorizedError")]
    Unauthorized,
    #[strum(serialize = "ForbiddenError")]
    Forbidden,
    #[strum(serialize = "NotFoundError")]
    NotFound,
    #[strum(serialize = "ConflictError")]
    Conflict,
    #[strum(serialize = "UnprocessableEntityError")]
    UnprocessableEntity,
    #[strum(serialize = "TooManyRequestsError")]
    TooManyRequests,
    #[strum(serialize = "InternalServerError")]
    InternalServer,
    #[strum(serialize = "ServiceUnavailableError")]
    ServiceUnavailable,
    #[strum(serialize = "GatewayTimeoutError")]
    GatewayTimeout,
}

impl ErrorKind {
    /// Display name reported as `name`
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Named variant for a status code; uncataloged codes map to `Structured`
    pub const fn for_status(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::TooManyRequests,
            500 => Self::InternalServer,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            _ => Self::Structured,
        }
    }
}

/// Anything a [`StructuredError`] can be built from
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorInput {
    /// Message text used as-is
    Text(String),
    /// Message taken from an existing error
    Error(String),
    /// Error-like JSON value whose fields are extracted
    Object(Value),
}

impl ErrorInput {
    /// Use the display text of an existing error
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::Error(err.to_string())
    }
}

impl From<&str> for ErrorInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ErrorInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Details> for ErrorInput {
    fn from(object: Details) -> Self {
        Self::Object(Value::Object(object))
    }
}

impl From<Value> for ErrorInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(_) | Value::Array(_) => Self::Object(value),
            Value::String(text) => Self::Text(text),
            scalar => Self::Text(scalar.to_string()),
        }
    }
}

/// An application failure with a status code and presentation metadata
///
/// `emoji`, `category` and `default_msg` are resolved from the status
/// catalog when the error is built and cannot be changed afterwards.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StructuredError {
    kind: ErrorKind,
    message: String,
    status_code: u16,
    details: Option<Details>,
    emoji: &'static str,
    category: &'static str,
    default_msg: &'static str,
    backtrace: Box<Backtrace>,
}

impl StructuredError {
    /// Build an error from text, an existing error, or an error-like object
    ///
    /// For objects, `details`, `statusCode`/`status` and
    /// `message`/`msg`/`error` are extracted. An explicit `status_code` or
    /// `details` argument always takes precedence over extracted values.
    pub fn new(input: impl Into<ErrorInput>, status_code: Option<u16>, details: Option<Details>) -> Self {
        Self::with_kind(ErrorKind::Structured, input.into(), status_code, details)
    }

    /// Wrap an existing error, keeping its message verbatim
    pub fn from_error(err: &dyn std::error::Error, status_code: Option<u16>, details: Option<Details>) -> Self {
        Self::new(ErrorInput::from_error(err), status_code, details)
    }

    pub(crate) fn with_kind(
        kind: ErrorKind,
        input: ErrorInput,
        mut status_code: Option<u16>,
        mut details: Option<Details>,
    ) -> Self {
        let message = match input {
            ErrorInput::Text(text) | ErrorInput::Error(text) => text,
            ErrorInput::Object(object) => {
                if details.is_none() {
                    details = object.get("details").and_then(Value::as_object).cloned();
                }
                if status_code.is_none() {
                    status_code = embedded_status_code(&object);
                }
                message_from_object(&object)
            }
        };

        let status_code = status_code.unwrap_or(DEFAULT_STATUS_CODE);
        let info = catalog::lookup(status_code);

        Self {
            kind,
            message,
            status_code,
            details,
            emoji: info.emoji,
            category: info.category,
            default_msg: info.default_msg,
            backtrace: Box::new(Backtrace::capture()),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Display name of the variant (e.g. `NotFoundError`)
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    pub const fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    pub const fn emoji(&self) -> &'static str {
        self.emoji
    }

    pub const fn category(&self) -> &'static str {
        self.category
    }

    pub const fn default_msg(&self) -> &'static str {
        self.default_msg
    }

    /// Call stack captured when the error was built
    ///
    /// Only populated when backtraces are enabled via `RUST_BACKTRACE` or
    /// `RUST_LIB_BACKTRACE`.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Serializable snapshot stamped with the current time
    pub fn to_structured(&self) -> StructuredReport {
        StructuredReport {
            emoji: self.emoji.to_owned(),
            name: self.name().to_owned(),
            status_code: self.status_code,
            details: self.details.clone(),
            message: self.message.clone(),
            category: self.category.to_owned(),
            default_msg: self.default_msg.to_owned(),
            timestamp: now_iso8601(),
        }
    }
}

impl HttpError for StructuredError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_type(&self) -> &str {
        self.category
    }

    fn client_message(&self) -> String {
        self.message.clone()
    }
}

/// JSON body describing a [`StructuredError`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredReport {
    pub emoji: String,
    pub name: String,
    pub status_code: u16,
    pub details: Option<Details>,
    pub message: String,
    pub category: String,
    pub default_msg: String,
    /// ISO-8601 UTC time the report was produced
    pub timestamp: String,
}

/// Current UTC time as ISO-8601 with millisecond precision
pub fn now_iso8601() -> String {
    jiff::Timestamp::now().strftime("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Interpret a JSON value as a status code
///
/// Only integral numbers within `u16` range qualify; strings, booleans,
/// fractional and out-of-range numbers yield `None`.
pub fn status_code_from_json(value: &Value) -> Option<u16> {
    value.as_f64().and_then(status_code_from_f64)
}

/// Interpret a float as a status code, rejecting NaN and infinities
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn status_code_from_f64(value: f64) -> Option<u16> {
    let in_range = value.is_finite() && value.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&value);
    in_range.then(|| value as u16)
}

fn embedded_status_code(object: &Value) -> Option<u16> {
    object
        .get("statusCode")
        .filter(|value| !value.is_null())
        .or_else(|| object.get("status"))
        .and_then(status_code_from_json)
}

fn message_from_object(object: &Value) -> String {
    let raw = MESSAGE_KEYS
        .iter()
        .find_map(|key| object.get(*key).filter(|value| !value.is_null()));

    match raw {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => UNEXPECTED_ERROR.to_owned(),
    }
}
