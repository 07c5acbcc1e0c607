//! StoreSyncWorker — background snapshot persistence
//!
//! Receives committed snapshots from the order book, debounces bursts,
//! writes the local copy first and then pushes to the backend with bounded
//! retry. Failures degrade to a typed [`SyncState`] signal; the in-memory
//! snapshot is never rolled back or blocked.

use std::sync::Arc;

use shared::models::order::OrderRecord;
use shared::models::sync::SyncState;
use tokio::sync::{mpsc, watch};
use tokio::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use super::local::LocalStore;
use super::remote::RemoteStore;
use super::{OrderStore, StoreError};

/// Debounce window for batching rapid edits
const DEBOUNCE_MS: u64 = 500;
/// Max backend push attempts per snapshot
const MAX_RETRIES: u32 = 3;
/// Initial retry delay
const INITIAL_RETRY_DELAY_SECS: u64 = 2;

type Snapshot = Arc<Vec<OrderRecord>>;

pub struct StoreSyncWorker {
    remote: Option<RemoteStore>,
    local: LocalStore,
    rx: mpsc::UnboundedReceiver<Snapshot>,
    state_tx: watch::Sender<SyncState>,
    shutdown: CancellationToken,
}

impl StoreSyncWorker {
    /// Build the worker plus the handles the order book and UI need:
    /// the snapshot sender and the sync-state receiver.
    pub fn new(
        remote: Option<RemoteStore>,
        local: LocalStore,
        shutdown: CancellationToken,
    ) -> (Self, mpsc::UnboundedSender<Snapshot>, watch::Receiver<SyncState>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SyncState::UpToDate);
        let worker = Self {
            remote,
            local,
            rx,
            state_tx,
            shutdown,
        };
        (worker, tx, state_rx)
    }

    /// Run until shutdown, flushing any pending snapshot on the way out
    pub async fn run(mut self) {
        tracing::info!("StoreSyncWorker started");

        let mut pending: Option<Snapshot> = None;
        let mut debounce_deadline: Option<Instant> = None;

        loop {
            let sleep_until =
                debounce_deadline.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    tracing::info!("StoreSyncWorker shutting down");
                    // Drain anything still queued; only the latest matters.
                    while let Ok(snapshot) = self.rx.try_recv() {
                        pending = Some(snapshot);
                    }
                    if let Some(snapshot) = pending.take() {
                        self.push(&snapshot).await;
                    }
                    break;
                }

                _ = tokio::time::sleep_until(sleep_until), if debounce_deadline.is_some() => {
                    if let Some(snapshot) = pending.take() {
                        self.push(&snapshot).await;
                    }
                    debounce_deadline = None;
                }

                received = self.rx.recv() => {
                    match received {
                        Some(snapshot) => {
                            // Only the latest snapshot matters; earlier ones
                            // are superseded whole.
                            pending = Some(snapshot);
                            debounce_deadline =
                                Some(Instant::now() + Duration::from_millis(DEBOUNCE_MS));
                            let _ = self.state_tx.send(SyncState::Pending);
                        }
                        None => {
                            if let Some(snapshot) = pending.take() {
                                self.push(&snapshot).await;
                            }
                            tracing::info!("Snapshot channel closed, StoreSyncWorker stopping");
                            break;
                        }
                    }
                }
            }
        }

        tracing::info!("StoreSyncWorker stopped");
    }

    /// Persist one snapshot: local first, then the backend
    async fn push(&self, snapshot: &Snapshot) {
        if let Err(e) = self.local.replace_all(snapshot).await {
            tracing::error!("Local store write failed: {e}");
        }

        let Some(remote) = &self.remote else {
            let _ = self.state_tx.send(SyncState::UpToDate);
            return;
        };

        match self.push_with_retry(remote, snapshot).await {
            Ok(()) => {
                tracing::debug!(records = snapshot.len(), "Snapshot pushed to backend");
                let _ = self.state_tx.send(SyncState::UpToDate);
            }
            Err(e) => {
                tracing::error!("Failed to push snapshot after retries: {e}");
                let _ = self.state_tx.send(SyncState::Failed);
            }
        }
    }

    /// Push with exponential backoff retry
    async fn push_with_retry(
        &self,
        remote: &RemoteStore,
        snapshot: &Snapshot,
    ) -> Result<(), StoreError> {
        let mut delay = Duration::from_secs(INITIAL_RETRY_DELAY_SECS);

        for attempt in 0..MAX_RETRIES {
            match remote.replace_all(snapshot).await {
                Ok(()) => return Ok(()),
                Err(e) if attempt + 1 < MAX_RETRIES => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        delay_secs = delay.as_secs(),
                        "Backend push failed, retrying: {e}"
                    );
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(Duration::from_secs(60));
                }
                Err(e) => return Err(e),
            }
        }

        unreachable!()
    }
}
