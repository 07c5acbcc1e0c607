//! Snapshot-and-replace order book
//!
//! One in-memory snapshot of the whole record set, swapped atomically per
//! operation. Readers clone an `Arc` and never observe a half-applied
//! change. Persistence is a side channel: each committed snapshot is
//! handed to the sync worker fire-and-forget, so a backend failure can
//! never roll back or block an in-memory mutation.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::order::OrderRecord;
use tokio::sync::mpsc;

use super::actions::{ActionContext, Apply};
use super::error::OrderError;

pub type Snapshot = Arc<Vec<OrderRecord>>;

pub struct OrderBook {
    records: RwLock<Snapshot>,
    persist_tx: Option<mpsc::UnboundedSender<Snapshot>>,
}

impl OrderBook {
    pub fn new(initial: Vec<OrderRecord>) -> Self {
        Self {
            records: RwLock::new(Arc::new(initial)),
            persist_tx: None,
        }
    }

    /// Attach the persistence channel consumed by the store sync worker
    pub fn with_persistence(
        initial: Vec<OrderRecord>,
        persist_tx: mpsc::UnboundedSender<Snapshot>,
    ) -> Self {
        Self {
            records: RwLock::new(Arc::new(initial)),
            persist_tx: Some(persist_tx),
        }
    }

    /// Current snapshot (cheap clone)
    pub fn snapshot(&self) -> Snapshot {
        self.records.read().clone()
    }

    /// Validate and commit an action against the current snapshot
    ///
    /// On error the snapshot is untouched.
    pub fn apply<A: Apply>(&self, action: &A) -> Result<A::Output, OrderError> {
        self.apply_with(action, &ActionContext::now())
    }

    /// [`apply`](Self::apply) with an explicit clock, for tests
    pub fn apply_with<A: Apply>(
        &self,
        action: &A,
        ctx: &ActionContext,
    ) -> Result<A::Output, OrderError> {
        let mut guard = self.records.write();
        let (next, output) = action.apply(&guard, ctx)?;
        let next = Arc::new(next);
        *guard = next.clone();
        drop(guard);

        if let Some(tx) = &self.persist_tx {
            // The worker may already be gone during shutdown; nothing to do.
            let _ = tx.send(next);
        }
        Ok(output)
    }
}
