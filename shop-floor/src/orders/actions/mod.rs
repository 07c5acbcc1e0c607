//! Order action implementations
//!
//! Each action implements the [`Apply`] trait: it validates against the
//! current snapshot and returns a complete replacement vector plus its
//! outcome. Nothing is mutated in place; the [`OrderBook`](super::OrderBook)
//! swaps the snapshot only after an action succeeds.

use shared::models::order::OrderRecord;

use super::error::OrderError;

mod confirm_delivery;
mod delete;
mod force_status;
mod register;
mod restore;
mod split;
mod toggle_paid;
mod transition;
mod update;

pub use confirm_delivery::{ConfirmDeliveryAction, DeliveryConfirmation};
pub use delete::DeleteOrdersAction;
pub use force_status::ForceStatusAction;
pub use register::RegisterOrderAction;
pub use restore::{AppendRecordsAction, AppendOutcome, ReplaceAllAction};
pub use split::SplitOrderAction;
pub use toggle_paid::TogglePaidAction;
pub use transition::TransitionAction;
pub use update::{OrderUpdate, UpdateOrderAction};

/// Ambient inputs an action needs besides the snapshot
///
/// The clock is injected so tests can pin dates; production code uses
/// [`ActionContext::now`].
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// Today as `YYYY-MM-DD`
    pub today: String,
}

impl ActionContext {
    pub fn now() -> Self {
        Self {
            today: shared::util::today_string(),
        }
    }

    pub fn on(today: impl Into<String>) -> Self {
        Self {
            today: today.into(),
        }
    }
}

/// A validated, all-or-nothing state change over the record snapshot
pub trait Apply {
    type Output;

    fn apply(
        &self,
        records: &[OrderRecord],
        ctx: &ActionContext,
    ) -> Result<(Vec<OrderRecord>, Self::Output), OrderError>;
}

/// Resolve the snapshot index of every id, rejecting unknown ids before
/// any mutation. Preserves the order of `ids`.
pub(super) fn resolve_indices(
    records: &[OrderRecord],
    ids: &[String],
) -> Result<Vec<usize>, OrderError> {
    if ids.is_empty() {
        return Err(OrderError::EmptySelection);
    }
    ids.iter()
        .map(|id| {
            records
                .iter()
                .position(|r| &r.id == id)
                .ok_or_else(|| OrderError::OrderNotFound(id.clone()))
        })
        .collect()
}

/// Append a marker to a free-text note, space-separated
pub(super) fn append_note(note: &str, marker: &str) -> String {
    if note.is_empty() {
        marker.to_string()
    } else {
        format!("{note} {marker}")
    }
}
