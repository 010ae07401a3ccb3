use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use faultline_core::{Details, StructuredError, make_named_error};
use http::Uri;
use serde_json::Value;

use crate::HandlerError;

/// Routes that always fail, one per error path
///
/// - `GET /errors/{code}`: named error for `code`
/// - `POST /errors`: error built from an error-like JSON body
/// - `GET /unexpected`: an error that is not structured
pub fn demo_router() -> Router {
    Router::new()
        .route("/errors", post(from_body))
        .route("/errors/{code}", get(named))
        .route("/unexpected", get(unexpected))
}

async fn named(Path(code): Path<u16>, uri: Uri) -> Result<(), HandlerError> {
    let mut details = Details::new();
    details.insert("path".to_owned(), Value::from(uri.path()));

    Err(make_named_error(code).create(None, Some(details)).into())
}

async fn from_body(Json(body): Json<Value>) -> Result<(), HandlerError> {
    Err(StructuredError::new(body, None, None).into())
}

async fn unexpected() -> Result<(), HandlerError> {
    Err(anyhow::anyhow!("connection reset while loading fixtures").into())
}
