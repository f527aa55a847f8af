use async_trait::async_trait;
use log::info;

use wakecoach_domain::notification::{NotificationMessage, NotificationSender};
use wakecoach_domain::shared::DomainError;

/// Terminal fallback used when no webhook is configured.
pub struct StdoutSender;

#[async_trait]
impl NotificationSender for StdoutSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        println!("{}: {}", message.title, message.content);
        info!("[notification] delivered to stdout: {}", message.title);
        Ok(())
    }
}
