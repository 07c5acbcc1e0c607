//! Local JSON-file store (the offline fallback)

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::models::order::OrderRecord;

use super::{OrderStore, StoreError};

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conventional location inside a data dir
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join("orders.json"))
    }
}

#[async_trait]
impl OrderStore for LocalStore {
    async fn read_all(&self) -> Result<Vec<OrderRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn replace_all(&self, records: &[OrderRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_vec_pretty(records)?;
        // Write-then-rename so a crash mid-write never corrupts the file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, payload).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
