use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use url::Url;

use wakecoach_domain::notification::{NotificationMessage, NotificationSender};
use wakecoach_domain::shared::DomainError;

use crate::config::timeouts::WEBHOOK_REQUEST_TIMEOUT;

/// Delivers notifications as a JSON POST to a configured webhook.
pub struct WebhookSender {
    client: Client,
    url: Url,
}

impl WebhookSender {
    pub fn new(url: &str) -> Result<Self, DomainError> {
        let url = Url::parse(url)
            .map_err(|e| DomainError::InvalidInput(format!("Invalid webhook URL: {e}")))?;

        let client = Client::builder()
            .timeout(WEBHOOK_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Infrastructure(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl NotificationSender for WebhookSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let payload = json!({
            "title": message.title,
            "content": message.content,
            "link": message.link,
        });

        let response = self
            .client
            .post(self.url.clone())
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to send webhook notification: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Infrastructure(format!(
                "Webhook failed with status {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}
