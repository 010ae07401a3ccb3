#![allow(clippy::must_use_candidate)]

//! Structured HTTP-style errors with console and JSON rendering
//!
//! A [`StructuredError`] carries a status code, optional details, and the
//! emoji/category/default message looked up from the [`catalog`]. A
//! [`Reporter`] holds the display settings and optional external logger
//! used when formatting or printing errors.

pub mod catalog;
mod error;
mod factory;
mod format;
mod logger;
mod reporter;
mod settings;
mod structured;
pub mod style;

pub use error::{ConfigError, HttpError};
pub use factory::*;
pub use format::{DETAILS_PREVIEW_LEN, FormatOptions, ResolvedOptions, truncated_json};
pub use logger::{LogLevel, Logger, LoggerBinding};
pub use reporter::Reporter;
pub use settings::{DisplaySettings, DisplaySettingsPatch};
pub use structured::{
    DEFAULT_STATUS_CODE, Details, ErrorInput, ErrorKind, StructuredError, StructuredReport, UNEXPECTED_ERROR,
    now_iso8601, status_code_from_f64, status_code_from_json,
};
