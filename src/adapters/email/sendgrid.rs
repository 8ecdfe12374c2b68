//! SendGrid adapter. Implements MailerPort via the v3 mail/send REST API.

use std::time::Duration;

use reqwest::Client;

use crate::domain::{DomainError, OutgoingEmail};
use crate::ports::MailerPort;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// SendGrid API adapter.
///
/// Requires an API key with mail-send scope. Each `send` issues one request;
/// the per-request timeout is fixed at construction.
pub struct SendGridMailer {
    client: Client,
    api_key: String,
}

impl SendGridMailer {
    /// Create the adapter with the given API key and per-request timeout.
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Mailer(format!("HTTP client init: {}", e)))?;
        Ok(Self { client, api_key })
    }
}

#[async_trait::async_trait]
impl MailerPort for SendGridMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DomainError> {
        let body = serde_json::json!({
            "personalizations": [{ "to": [{ "email": email.to }] }],
            "from": { "email": email.from },
            "subject": email.subject,
            "content": [
                { "type": "text/plain", "value": email.text_body },
                { "type": "text/html", "value": email.html_body },
            ],
        });

        let res = self
            .client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Mailer(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::Mailer(format!(
                "SendGrid API error {}: {}",
                status, text
            )));
        }

        Ok(())
    }
}
