//! Quote-form submission: persist first, then fan out to the best-effort
//! side channels.

use brightroof_core::form::{FormInput, FormSubmission, FormValidationError};
use chrono::Utc;
use thiserror::Error;

use crate::clients::{EmailClient, SheetsClient, SideChannelOutcome};
use crate::store::{DocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] FormValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Persist a submission and fan out notifications.
///
/// Only the store write can fail the call. The sheet append and the email
/// notification are attempted afterwards, each once, and their failures are
/// logged and swallowed.
pub async fn submit_form<S: DocumentStore>(
    store: &S,
    email: &EmailClient,
    sheets: &SheetsClient,
    input: FormInput,
) -> Result<String, SubmitError> {
    let submission = FormSubmission::from_input(input, Utc::now())?;
    let document =
        serde_json::to_value(&submission).map_err(|err| StoreError::Decode(err.to_string()))?;
    store.create_if_not_exists(document).await?;
    tracing::info!(id = %submission.id, "form submission stored");

    match sheets.append_submission(&submission).await {
        Ok(SideChannelOutcome::Delivered) => {
            tracing::debug!(id = %submission.id, "submission appended to sheet")
        }
        Ok(SideChannelOutcome::Skipped) => {}
        Err(err) => tracing::warn!(id = %submission.id, %err, "sheet append failed"),
    }
    match email.notify_submission(&submission).await {
        Ok(SideChannelOutcome::Delivered) => {
            tracing::debug!(id = %submission.id, "notification email sent")
        }
        Ok(SideChannelOutcome::Skipped) => {}
        Err(err) => tracing::warn!(id = %submission.id, %err, "notification email failed"),
    }

    Ok(submission.id)
}
