//! Mutation envelope for the CMS mutation endpoint.

use serde::Serialize;
use serde_json::Value;

/// One mutation in a commit. Externally tagged, matching the CMS wire
/// protocol (`{"createIfNotExists": {...}}`, `{"patch": {...}}`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation {
    CreateIfNotExists(Value),
    Patch(PatchMutation),
}

#[derive(Debug, Clone, Serialize)]
pub struct PatchMutation {
    pub id: String,
    pub set: Value,
}

/// Request body for the mutation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MutationRequest {
    pub mutations: Vec<Mutation>,
}

impl MutationRequest {
    pub fn single(mutation: Mutation) -> Self {
        Self {
            mutations: vec![mutation],
        }
    }
}
