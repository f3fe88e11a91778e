// File-backed persistent slot.
//
// Purpose
// - Keep slot values across process restarts, the way browser local storage survives reloads.
//
// Responsibilities
// - Hold every key in one JSON object file, cached in memory.
// - Rewrite the whole file on each set through a temporary file and a rename.

use crate::shared::infrastructure::persistent_slot::{PersistentSlot, SlotError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::{fs, sync::RwLock};
use tracing::{debug, instrument};

pub struct FileSlot {
    values: RwLock<BTreeMap<String, String>>,
    file_path: PathBuf,
}

impl FileSlot {
    /// Opens the slot file, starting empty if it does not exist yet.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, SlotError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let values = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| SlotError::Backend(format!("corrupt slot file: {e}")))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %file_path.display(), keys = values.len(), "slot file opened");

        Ok(Self {
            values: RwLock::new(values),
            file_path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    async fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), SlotError> {
        let data = serde_json::to_vec_pretty(values).map_err(|e| SlotError::Backend(e.to_string()))?;
        let tmp = self.file_path.with_extension("tmp");
        fs::write(&tmp, data).await?;
        fs::rename(&tmp, &self.file_path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl PersistentSlot for FileSlot {
    async fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<(), SlotError> {
        let mut values = self.values.write().await;
        let previous = values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush(&values).await {
            match previous {
                Some(previous) => values.insert(key.to_string(), previous),
                None => values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
