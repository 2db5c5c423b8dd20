//! Lead reconciliation: upsert partial webhook updates into the store,
//! keyed by the phone-number-derived lead id.

use brightroof_core::lead::{lead_id, LeadRecord, LeadUpdate, LeadValidationError, LEAD_DOC_TYPE};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::store::{DocumentStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconcileAction {
    Created,
    Updated,
}

impl ReconcileAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub action: ReconcileAction,
    pub id: String,
}

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error(transparent)]
    Validation(#[from] LeadValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Upsert one partial lead-state update.
///
/// Exactly one store read (the existence check) and one write per call.
/// The read completes before the create-vs-update branch is decided; across
/// concurrent calls for the same phone number there is no isolation — the
/// later write wins.
pub async fn reconcile<S: DocumentStore>(
    store: &S,
    update: &LeadUpdate,
) -> Result<ReconcileOutcome, ReconcileError> {
    let phone = update.phone()?;
    let id = lead_id(phone);

    match store.fetch(&id).await? {
        Some(_) => {
            store
                .patch_set(&id, Value::Object(update.to_set_patch()))
                .await?;
            tracing::debug!(%id, "lead updated");
            Ok(ReconcileOutcome {
                action: ReconcileAction::Updated,
                id,
            })
        }
        None => {
            let record = LeadRecord::from_update(update)?;
            let document = serde_json::to_value(&record)
                .map_err(|err| StoreError::Decode(err.to_string()))?;
            store.create_if_not_exists(document).await?;
            tracing::debug!(%id, "lead created");
            Ok(ReconcileOutcome {
                action: ReconcileAction::Created,
                id,
            })
        }
    }
}

/// Fetch every stored lead, skipping documents that no longer decode (a
/// bad document must not take the dashboard down).
pub async fn fetch_leads<S: DocumentStore>(store: &S) -> Result<Vec<LeadRecord>, StoreError> {
    let documents = store.documents_of_type(LEAD_DOC_TYPE).await?;
    Ok(documents
        .into_iter()
        .filter_map(|document| match serde_json::from_value::<LeadRecord>(document) {
            Ok(lead) => Some(lead),
            Err(err) => {
                tracing::warn!(%err, "skipping undecodable lead document");
                None
            }
        })
        .collect())
}
