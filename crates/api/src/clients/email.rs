use brightroof_core::form::FormSubmission;
use reqwest::Client;
use serde_json::json;

use crate::config::AppConfig;

use super::SideChannelOutcome;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Transactional email notifications for new quote requests.
#[derive(Debug, Clone)]
pub struct EmailClient {
    inner: Option<Inner>,
}

#[derive(Debug, Clone)]
struct Inner {
    client: Client,
    api_key: String,
    from: String,
    to: String,
}

impl EmailClient {
    pub fn from_config(config: &AppConfig) -> Self {
        match (
            &config.resend_api_key,
            &config.notify_email_from,
            &config.notify_email_to,
        ) {
            (Some(api_key), Some(from), Some(to)) => Self {
                inner: Some(Inner {
                    client: Client::new(),
                    api_key: api_key.clone(),
                    from: from.clone(),
                    to: to.clone(),
                }),
            },
            _ => {
                tracing::info!("email notifications disabled (missing RESEND_API_KEY or addresses)");
                Self { inner: None }
            }
        }
    }

    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// One attempt, no retry. Callers log failures and continue.
    pub async fn notify_submission(
        &self,
        submission: &FormSubmission,
    ) -> Result<SideChannelOutcome, reqwest::Error> {
        let Some(inner) = &self.inner else {
            return Ok(SideChannelOutcome::Skipped);
        };
        let body = json!({
            "from": inner.from,
            "to": [inner.to],
            "subject": format!("New quote request from {}", submission.name),
            "text": format!(
                "Name: {}\nEmail: {}\nPhone: {}\nPostcode: {}\n\n{}",
                submission.name,
                submission.email,
                submission.phone,
                submission.postcode,
                submission.message,
            ),
        });
        inner
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&inner.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(SideChannelOutcome::Delivered)
    }
}
