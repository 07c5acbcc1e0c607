//! Order Store port
//!
//! The engine owns its snapshot; persistence is a port with two
//! implementations (shared backend over HTTP, local JSON file) plus a
//! background worker that pushes committed snapshots fire-and-forget.
//! Store failures degrade — they never become operation failures.

use async_trait::async_trait;
use shared::models::order::OrderRecord;
use thiserror::Error;

pub mod local;
pub mod remote;
pub mod worker;

pub use local::LocalStore;
pub use remote::RemoteStore;
pub use worker::StoreSyncWorker;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Local store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt store payload: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Whole-collection read/replace port
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn read_all(&self) -> Result<Vec<OrderRecord>, StoreError>;
    async fn replace_all(&self, records: &[OrderRecord]) -> Result<(), StoreError>;
}

/// Initial load: prefer the backend, degrade to the local copy
///
/// A failing backend read is logged and falls through; a failing local
/// read starts the session empty rather than refusing to start.
pub async fn load_initial(remote: Option<&RemoteStore>, local: &LocalStore) -> Vec<OrderRecord> {
    if let Some(remote) = remote {
        match remote.read_all().await {
            Ok(records) => return records,
            Err(e) => {
                tracing::warn!("Backend read failed, falling back to local store: {e}");
            }
        }
    }
    match local.read_all().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Local store read failed, starting empty: {e}");
            Vec::new()
        }
    }
}
