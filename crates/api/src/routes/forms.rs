//! Quote-request form endpoint.

use axum::{extract::State, routing::post, Json, Router};
use brightroof_core::form::FormInput;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::services::forms::{submit_form, SubmitError};
use crate::state::AppState;
use crate::store::DocumentStore;

pub fn routes<S: DocumentStore>() -> Router<AppState<S>> {
    Router::new().route("/api/submit-form", post(submit::<S>))
}

async fn submit<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let input: FormInput = serde_json::from_value(body)
        .map_err(|_| ApiError::Validation("Missing required fields".to_string()))?;

    let submission_id = submit_form(state.store(), state.email(), state.sheets(), input)
        .await
        .map_err(|err| match err {
            SubmitError::Validation(err) => ApiError::Validation(err.to_string()),
            SubmitError::Store(err) => ApiError::from(err),
        })?;

    Ok(Json(json!({
        "success": true,
        "submissionId": submission_id,
    })))
}
