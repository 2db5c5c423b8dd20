//! Published-page rendering route.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use brightroof_core::page::Page;
use brightroof_render::{render_not_found, render_page};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::store::DocumentStore;

pub fn routes<S: DocumentStore>() -> Router<AppState<S>> {
    Router::new().route("/pages/{slug}", get(render::<S>))
}

/// Fetch the published page for a slug and run it through the composition
/// pipeline. A missing page is a rendered 404 body, not a JSON error.
async fn render<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path(slug): Path<String>,
) -> ApiResult<Response> {
    match state.store().published_page(&slug).await? {
        None => Ok((StatusCode::NOT_FOUND, Html(render_not_found(&slug))).into_response()),
        Some(document) => {
            let page: Page = serde_json::from_value(document).map_err(|err| {
                ApiError::Upstream(anyhow::anyhow!("stored page does not decode: {err}"))
            })?;
            Ok(Html(render_page(&page).to_html()).into_response())
        }
    }
}
