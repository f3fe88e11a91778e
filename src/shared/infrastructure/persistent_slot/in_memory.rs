use crate::shared::infrastructure::persistent_slot::{PersistentSlot, SlotError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySlot {
    values: RwLock<HashMap<String, String>>,
    writes: AtomicUsize,
    is_offline: AtomicBool,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let values = HashMap::from([(key.to_string(), value.into())]);
        Self {
            values: RwLock::new(values),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), SlotError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(SlotError::Backend("Slot offline".into()));
        }
        Ok(())
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PersistentSlot for InMemorySlot {
    async fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        self.ensure_online()?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SlotError> {
        self.ensure_online()?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
