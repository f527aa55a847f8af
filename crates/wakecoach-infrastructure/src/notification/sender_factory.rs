use std::sync::Arc;

use wakecoach_domain::notification::NotificationSender;
use wakecoach_domain::shared::DomainError;

use super::stdout::StdoutSender;
use super::webhook::WebhookSender;

/// Create the notification sender for the configured channel: a webhook when
/// a URL is configured, the terminal otherwise.
pub fn create_sender(
    webhook_url: Option<&str>,
) -> Result<Arc<dyn NotificationSender>, DomainError> {
    match webhook_url {
        Some(url) => Ok(Arc::new(WebhookSender::new(url)?)),
        None => Ok(Arc::new(StdoutSender)),
    }
}
