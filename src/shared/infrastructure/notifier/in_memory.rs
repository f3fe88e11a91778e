// In memory implementation of the Notifier port.
//
// Purpose
// - Let tests assert which messages a cart operation showed to the user.

use crate::shared::infrastructure::notifier::{Notification, Notifier};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.lock().await)
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, notification: Notification) {
        self.notifications.lock().await.push(notification);
    }
}
