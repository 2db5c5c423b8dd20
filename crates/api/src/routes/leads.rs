//! Lead webhook and dashboard endpoints.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use brightroof_core::lead::LeadUpdate;
use brightroof_core::query::{filter_leads, sort_leads, LeadFilter, TimeRange};
use brightroof_core::stats::{compute_stats, StatsSummary};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::services::leads::{fetch_leads, reconcile, ReconcileAction, ReconcileError};
use crate::state::AppState;
use crate::store::DocumentStore;

pub fn routes<S: DocumentStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/api/lead-update", post(lead_update::<S>))
        .route("/api/leads", get(list_leads::<S>))
        .route("/api/lead-stats", get(lead_stats::<S>))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LeadQueryParams {
    time_range: Option<String>,
    filter: Option<String>,
}

impl LeadQueryParams {
    fn to_filter(&self) -> LeadFilter {
        LeadFilter {
            time_range: TimeRange::parse(self.time_range.as_deref()),
            tag: self.filter.clone(),
        }
    }
}

/// The reconciliation webhook, called by the spreadsheet automation.
async fn lead_update<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let update: LeadUpdate = serde_json::from_value(body)
        .map_err(|err| ApiError::Validation(format!("invalid lead update: {err}")))?;

    let outcome = reconcile(state.store(), &update)
        .await
        .map_err(|err| match err {
            ReconcileError::Validation(err) => ApiError::Validation(err.to_string()),
            ReconcileError::Store(err) => ApiError::from(err),
        })?;

    let message = match outcome.action {
        ReconcileAction::Created => "Lead created",
        ReconcileAction::Updated => "Lead updated",
    };
    Ok(Json(json!({
        "success": true,
        "action": outcome.action.as_str(),
        "id": outcome.id,
        "message": message,
    })))
}

/// Filtered, sorted lead list for the dashboard.
async fn list_leads<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<LeadQueryParams>,
) -> ApiResult<Json<Value>> {
    let leads = fetch_leads(state.store()).await?;
    let mut leads = filter_leads(leads, &params.to_filter(), Utc::now());
    sort_leads(&mut leads);
    Ok(Json(json!({
        "count": leads.len(),
        "leads": leads,
    })))
}

/// Aggregated stats over the same filtered view.
async fn lead_stats<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<LeadQueryParams>,
) -> ApiResult<Json<StatsSummary>> {
    let leads = fetch_leads(state.store()).await?;
    let leads = filter_leads(leads, &params.to_filter(), Utc::now());
    Ok(Json(compute_stats(&leads)))
}
