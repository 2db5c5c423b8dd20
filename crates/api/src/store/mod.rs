//! Document-store abstraction.
//!
//! The headless CMS owns all persisted state; this service holds none of its
//! own and re-fetches per request. The trait captures the operations the
//! site actually performs so handlers can be tested against an in-memory
//! store.

pub mod mutation;
pub mod sanity;

#[cfg(test)]
pub mod memory;

use std::future::Future;

use serde_json::Value;
use thiserror::Error;

pub use sanity::SanityStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("store response was not the expected shape: {0}")]
    Decode(String),
}

/// Async document-store operations. Every call is a single round trip; no
/// batching, no transactions.
pub trait DocumentStore: Clone + Send + Sync + 'static {
    /// Fetch a document by id. Missing is `Ok(None)`, not an error.
    fn fetch(&self, id: &str) -> impl Future<Output = Result<Option<Value>, StoreError>> + Send;

    /// Create the document unless one with its `_id` already exists.
    fn create_if_not_exists(
        &self,
        document: Value,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Commit a shallow set-patch: the given fields overwrite, everything
    /// else on the stored document is untouched.
    fn patch_set(
        &self,
        id: &str,
        set: Value,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// All documents of a `_type`. Ordering is the store's; callers sort.
    fn documents_of_type(
        &self,
        doc_type: &str,
    ) -> impl Future<Output = Result<Vec<Value>, StoreError>> + Send;

    /// The published page with the given slug, if any.
    fn published_page(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Value>, StoreError>> + Send;
}
