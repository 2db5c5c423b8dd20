use std::sync::Arc;

use crate::clients::{EmailClient, SheetsClient};
use crate::config::AppConfig;
use crate::store::DocumentStore;

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap. Generic over the
/// document store so handlers can be tested against an in-memory one.
#[derive(Clone)]
pub struct AppState<S: DocumentStore> {
    inner: Arc<InnerState<S>>,
}

struct InnerState<S> {
    store: S,
    email: EmailClient,
    sheets: SheetsClient,
    #[allow(dead_code)]
    config: AppConfig,
}

impl<S: DocumentStore> AppState<S> {
    pub fn new(store: S, email: EmailClient, sheets: SheetsClient, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(InnerState {
                store,
                email,
                sheets,
                config,
            }),
        }
    }

    pub fn store(&self) -> &S {
        &self.inner.store
    }

    pub fn email(&self) -> &EmailClient {
        &self.inner.email
    }

    pub fn sheets(&self) -> &SheetsClient {
        &self.inner.sheets
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
