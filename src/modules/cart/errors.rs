use crate::modules::cart::adapters::outbound::catalog::CatalogError;
use crate::modules::cart::core::decision::DecideError;
use crate::shared::infrastructure::persistent_slot::SlotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error("cart snapshot could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CartError {
    pub fn domain(&self) -> Option<&DecideError> {
        match self {
            Self::Domain(reason) => Some(reason),
            _ => None,
        }
    }
}
