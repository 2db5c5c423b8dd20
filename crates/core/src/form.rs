//! Quote-request form submissions.
//!
//! A submission is written once to the document store and never updated by
//! this system; status changes are a manual CMS operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Document `_type` for form submissions in the store.
pub const FORM_DOC_TYPE: &str = "formSubmission";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormValidationError {
    #[error("Missing required fields")]
    MissingRequiredFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionStatus {
    #[default]
    New,
    Viewed,
    Contacted,
    Converted,
    NotInterested,
}

/// The raw form body from the website.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub postcode: Option<String>,
    pub message: Option<String>,
}

impl FormInput {
    /// `name`, `email`, `phone` and `postcode` are required; blank strings
    /// count as missing.
    pub fn validate(&self) -> Result<(), FormValidationError> {
        let present = |field: &Option<String>| {
            field
                .as_deref()
                .map(str::trim)
                .is_some_and(|value| !value.is_empty())
        };
        if present(&self.name) && present(&self.email) && present(&self.phone) && present(&self.postcode)
        {
            Ok(())
        } else {
            Err(FormValidationError::MissingRequiredFields)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default = "form_doc_type")]
    pub doc_type: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub postcode: String,
    #[serde(default)]
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
}

fn form_doc_type() -> String {
    FORM_DOC_TYPE.to_string()
}

impl FormSubmission {
    /// Validate the input and mint a new submission with status `New`.
    pub fn from_input(input: FormInput, submitted_at: DateTime<Utc>) -> Result<Self, FormValidationError> {
        input.validate()?;
        Ok(Self {
            id: format!("form-submission.{}", Uuid::new_v4()),
            doc_type: FORM_DOC_TYPE.to_string(),
            name: input.name.unwrap_or_default().trim().to_string(),
            email: input.email.unwrap_or_default().trim().to_string(),
            phone: input.phone.unwrap_or_default().trim().to_string(),
            postcode: input.postcode.unwrap_or_default().trim().to_string(),
            message: input.message.unwrap_or_default(),
            submitted_at,
            status: SubmissionStatus::New,
        })
    }
}
