use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Durable string-keyed storage. Values are written whole; there are no
/// partial updates.
#[async_trait]
pub trait PersistentSlot: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, SlotError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), SlotError>;
}

pub mod file;
pub mod in_memory;
