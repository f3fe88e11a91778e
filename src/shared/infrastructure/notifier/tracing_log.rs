use crate::shared::infrastructure::notifier::{Notification, Notifier, Severity};
use tracing::{info, warn};

/// Writes notifications to the log. Used when no interactive user is attached,
/// e.g. behind the HTTP shell where the message also travels in the response.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait::async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => info!(text = %notification.message, "cart notification"),
            Severity::Error => warn!(text = %notification.message, "cart notification"),
        }
    }
}
