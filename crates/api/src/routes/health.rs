use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;
use crate::store::DocumentStore;

/// Health check routes.
pub fn routes<S: DocumentStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/health", get(health_check::<S>))
        .route("/v1/ping", get(ping))
}

/// Full health check — verifies the document store is reachable with a
/// cheap existence probe.
async fn health_check<S: DocumentStore>(State(state): State<AppState<S>>) -> ApiResult<Json<Value>> {
    state.store().fetch("health-probe").await?;
    Ok(Json(json!({
        "status": "ok",
        "store": "reachable",
    })))
}

/// Lightweight ping — no store check.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
