pub mod forms;
pub mod health;
pub mod leads;
pub mod pages;

use axum::Router;

use crate::state::AppState;
use crate::store::DocumentStore;

/// Assemble the full router with all route groups.
pub fn build_router<S: DocumentStore>(state: AppState<S>) -> Router {
    Router::new()
        .merge(health::routes::<S>())
        .merge(pages::routes::<S>())
        .merge(leads::routes::<S>())
        .merge(forms::routes::<S>())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{EmailClient, SheetsClient};
    use crate::config::AppConfig;
    use crate::store::memory::MemoryStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(store: MemoryStore) -> Router {
        build_router(AppState::new(
            store,
            EmailClient::disabled(),
            SheetsClient::disabled(),
            AppConfig::for_tests(),
        ))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn ping_responds_ok() {
        let response = app(MemoryStore::new()).oneshot(get("/v1/ping")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn lead_update_creates_then_updates() {
        let app = app(MemoryStore::new());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/lead-update",
                json!({
                    "phoneNumber": "07911000000",
                    "contactStatus": "HOT",
                    "firstName": "Jo",
                    "secondName": "Bloggs",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["action"], "created");
        assert_eq!(body["id"], "dbr-07911000000");

        let response = app
            .oneshot(post_json(
                "/api/lead-update",
                json!({ "phoneNumber": "07911000000", "contactStatus": "CONVERTED" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["action"], "updated");
        assert_eq!(body["id"], "dbr-07911000000");
    }

    #[tokio::test]
    async fn lead_update_without_phone_number_is_400() {
        let response = app(MemoryStore::new())
            .oneshot(post_json(
                "/api/lead-update",
                json!({ "contactStatus": "HOT" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "phoneNumber is required");
    }

    #[tokio::test]
    async fn leads_endpoint_filters_and_sorts() {
        let store = MemoryStore::new();
        store.seed(json!({
            "_id": "dbr-07911000001",
            "_type": "dbrLead",
            "phoneNumber": "07911000001",
            "contactStatus": "Sent_1",
            "m1Sent": "2024-03-01T09:00:00Z",
        }));
        store.seed(json!({
            "_id": "dbr-07911000002",
            "_type": "dbrLead",
            "phoneNumber": "07911000002",
            "contactStatus": "HOT",
            "m1Sent": "2024-01-01T09:00:00Z",
            "replyReceived": "2024-01-02T09:00:00Z",
        }));

        let response = app(store.clone()).oneshot(get("/api/leads")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["count"], 2);
        // The replied lead sorts first despite the earlier m1Sent.
        assert_eq!(body["leads"][0]["_id"], "dbr-07911000002");

        let response = app(store)
            .oneshot(get("/api/leads?filter=HOT"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["leads"][0]["contactStatus"], "HOT");
    }

    #[tokio::test]
    async fn stats_endpoint_handles_empty_store() {
        let response = app(MemoryStore::new())
            .oneshot(get("/api/lead-stats"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["totalLeads"], 0);
        assert_eq!(body["replyRate"], 0.0);
        assert_eq!(body["messagesSent"]["total"], 0);
    }

    #[tokio::test]
    async fn form_submission_round_trips() {
        let store = MemoryStore::new();
        let response = app(store.clone())
            .oneshot(post_json(
                "/api/submit-form",
                json!({
                    "name": "Jo Bloggs",
                    "email": "jo@example.com",
                    "phone": "07911 000000",
                    "postcode": "BS1 4DJ",
                    "message": "South-facing roof",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        let id = body["submissionId"].as_str().unwrap();
        assert!(store.get(id).is_some());
    }

    #[tokio::test]
    async fn form_submission_missing_fields_is_400() {
        let response = app(MemoryStore::new())
            .oneshot(post_json(
                "/api/submit-form",
                json!({ "name": "Jo Bloggs", "email": "jo@example.com" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing required fields");
    }

    #[tokio::test]
    async fn published_page_renders_with_fallback_blocks() {
        let store = MemoryStore::new();
        store.seed(json!({
            "_id": "page-home",
            "_type": "page",
            "title": "Solar for your home",
            "slug": { "current": "home" },
            "status": "published",
            "content": [
                { "_type": "hero", "title": "Go solar" },
                { "_type": "holo-banner" },
            ],
        }));

        let response = app(store).oneshot(get("/pages/home")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Go solar"));
        assert!(html.contains("holo-banner"));
    }

    #[tokio::test]
    async fn missing_page_is_a_rendered_404() {
        let response = app(MemoryStore::new())
            .oneshot(get("/pages/nonexistent"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("Page not found"));
    }

    #[tokio::test]
    async fn draft_page_is_not_served() {
        let store = MemoryStore::new();
        store.seed(json!({
            "_id": "page-draft",
            "_type": "page",
            "title": "Draft",
            "slug": { "current": "draft" },
            "status": "draft",
            "content": [],
        }));

        let response = app(store).oneshot(get("/pages/draft")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
