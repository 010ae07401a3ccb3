use std::error::Error;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use faultline_core::{FormatOptions, HttpError, Reporter, StructuredError, UNEXPECTED_ERROR, now_iso8601};
use http::StatusCode;

/// Error type returned by handlers
///
/// Converts into a response directly; when the [`report_errors`]
/// middleware is installed the failure is also reported to the console
/// and any bound logger.
#[derive(Debug)]
pub enum HandlerError {
    /// A structured error with its own status code
    Structured(StructuredError),
    /// Anything else, answered with a generic 500
    Unexpected(anyhow::Error),
}

impl From<StructuredError> for HandlerError {
    fn from(err: StructuredError) -> Self {
        Self::Structured(err)
    }
}

impl From<anyhow::Error> for HandlerError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StructuredError>() {
            Ok(structured) => Self::Structured(structured),
            Err(other) => Self::Unexpected(other),
        }
    }
}

/// Failure stashed in response extensions for [`report_errors`]
#[derive(Clone)]
struct Failure(Arc<dyn Error + Send + Sync>);

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let error: Arc<dyn Error + Send + Sync> = match self {
            Self::Structured(err) => Arc::new(err),
            Self::Unexpected(err) => Arc::from(Box::<dyn Error + Send + Sync>::from(err)),
        };

        let mut response = error_response(error.as_ref());
        response.extensions_mut().insert(Failure(error));
        response
    }
}

/// Turn a caught error into the final HTTP response
///
/// Structured errors are reported through `reporter` and answered with
/// their own status and JSON body. Any other error yields a 500 with a
/// generic body. This is terminal: nothing runs after it.
pub fn handle(reporter: &Reporter, err: &(dyn Error + 'static)) -> Response {
    match err.downcast_ref::<StructuredError>() {
        Some(structured) => {
            tracing::debug!(
                status = %HttpError::status_code(structured),
                error_type = structured.error_type(),
                message = %structured.client_message(),
                "answering structured error"
            );
            reporter.report(structured, FormatOptions::default());
        }
        None => tracing::warn!(error = %err, "unexpected error reached the error handler"),
    }

    error_response(err)
}

fn error_response(err: &(dyn Error + 'static)) -> Response {
    let Some(structured) = err.downcast_ref::<StructuredError>() else {
        return unexpected_response();
    };

    (HttpError::status_code(structured), Json(structured.to_structured())).into_response()
}

fn unexpected_response() -> Response {
    let body = serde_json::json!({
        "message": UNEXPECTED_ERROR,
        "timestamp": now_iso8601(),
    });

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Middleware that hands failed responses to [`handle`]
pub async fn report_errors(State(reporter): State<Arc<Reporter>>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<Failure>() {
        Some(Failure(error)) => handle(&reporter, error.as_ref()),
        None => response,
    }
}
