use std::env;

/// Application configuration loaded from environment variables.
///
/// The email and spreadsheet side channels are optional: when their
/// settings are absent the channel is disabled rather than an error.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Base URL of the headless CMS API.
    pub cms_base_url: String,
    /// CMS dataset name.
    pub cms_dataset: String,
    /// CMS API token, if the dataset is private.
    pub cms_api_token: Option<String>,
    /// Transactional email API key (notification channel off when absent).
    pub resend_api_key: Option<String>,
    /// Notification recipient address.
    pub notify_email_to: Option<String>,
    /// Notification sender address.
    pub notify_email_from: Option<String>,
    /// Spreadsheet-append webhook URL (channel off when absent).
    pub sheets_webhook_url: Option<String>,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3030".to_string())
                .parse()
                .expect("PORT must be a valid u16"),
            cms_base_url: env::var("CMS_BASE_URL")?,
            cms_dataset: env::var("CMS_DATASET").unwrap_or_else(|_| "production".to_string()),
            cms_api_token: env::var("CMS_API_TOKEN").ok(),
            resend_api_key: env::var("RESEND_API_KEY").ok(),
            notify_email_to: env::var("NOTIFY_EMAIL_TO").ok(),
            notify_email_from: env::var("NOTIFY_EMAIL_FROM").ok(),
            sheets_webhook_url: env::var("SHEETS_WEBHOOK_URL").ok(),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
impl AppConfig {
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            cms_base_url: "http://cms.invalid".to_string(),
            cms_dataset: "test".to_string(),
            cms_api_token: None,
            resend_api_key: None,
            notify_email_to: None,
            notify_email_from: None,
            sheets_webhook_url: None,
            log_level: "debug".to_string(),
        }
    }
}
