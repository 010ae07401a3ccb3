use axum::Json;
use faultline_core::catalog;
use serde_json::{Value, json};

/// Liveness check that also reports the size of the status catalog
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "catalogedCodes": catalog::entries().count(),
    }))
}
