use brightroof_core::form::FormSubmission;
use reqwest::Client;

use crate::config::AppConfig;

use super::SideChannelOutcome;

/// Appends submissions to the office spreadsheet via its webhook URL.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    inner: Option<Inner>,
}

#[derive(Debug, Clone)]
struct Inner {
    client: Client,
    webhook_url: String,
}

impl SheetsClient {
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.sheets_webhook_url {
            Some(webhook_url) => Self {
                inner: Some(Inner {
                    client: Client::new(),
                    webhook_url: webhook_url.clone(),
                }),
            },
            None => {
                tracing::info!("spreadsheet append disabled (missing SHEETS_WEBHOOK_URL)");
                Self { inner: None }
            }
        }
    }

    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// One attempt, no retry. Callers log failures and continue.
    pub async fn append_submission(
        &self,
        submission: &FormSubmission,
    ) -> Result<SideChannelOutcome, reqwest::Error> {
        let Some(inner) = &self.inner else {
            return Ok(SideChannelOutcome::Skipped);
        };
        inner
            .client
            .post(&inner.webhook_url)
            .json(submission)
            .send()
            .await?
            .error_for_status()?;
        Ok(SideChannelOutcome::Delivered)
    }
}
