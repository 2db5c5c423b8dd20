//! In-memory document store for handler and service tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::{DocumentStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document directly, keyed by its `_id`.
    pub fn seed(&self, document: Value) {
        let id = document
            .get("_id")
            .and_then(Value::as_str)
            .expect("seeded document must have an _id")
            .to_string();
        self.documents.lock().unwrap().insert(id, document);
    }

    pub fn get(&self, id: &str) -> Option<Value> {
        self.documents.lock().unwrap().get(id).cloned()
    }
}

impl DocumentStore for MemoryStore {
    async fn fetch(&self, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.get(id))
    }

    async fn create_if_not_exists(&self, document: Value) -> Result<(), StoreError> {
        let id = document
            .get("_id")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::Decode("document missing _id".to_string()))?
            .to_string();
        self.documents.lock().unwrap().entry(id).or_insert(document);
        Ok(())
    }

    async fn patch_set(&self, id: &str, set: Value) -> Result<(), StoreError> {
        let mut documents = self.documents.lock().unwrap();
        if let Some(Value::Object(stored)) = documents.get_mut(id) {
            if let Value::Object(fields) = set {
                for (key, value) in fields {
                    stored.insert(key, value);
                }
            }
        }
        Ok(())
    }

    async fn documents_of_type(&self, doc_type: &str) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .values()
            .filter(|doc| doc.get("_type").and_then(Value::as_str) == Some(doc_type))
            .cloned()
            .collect())
    }

    async fn published_page(&self, slug: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .values()
            .find(|doc| {
                doc.get("_type").and_then(Value::as_str) == Some("page")
                    && doc
                        .get("slug")
                        .and_then(|s| s.get("current"))
                        .and_then(Value::as_str)
                        == Some(slug)
                    && doc.get("status").and_then(Value::as_str) == Some("published")
            })
            .cloned())
    }
}
