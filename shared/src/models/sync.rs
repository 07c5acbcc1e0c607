//! Store synchronization state

use serde::{Deserialize, Serialize};

/// Where the last in-memory snapshot stands relative to the backend
///
/// Writes to the backend are fire-and-forget; instead of surfacing write
/// errors to callers, the sync worker publishes this signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncState {
    /// Backend has the current snapshot
    #[default]
    UpToDate,
    /// A push is queued or in flight
    Pending,
    /// The last push failed; local copy is still authoritative
    Failed,
}

/// Result of the backend liveness probe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Connectivity {
    Online,
    Offline,
}
