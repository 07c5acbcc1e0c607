//! Guarded status transitions, single or batch
//!
//! The transition table is the only path that moves an order between
//! states during normal operation. `Finished -> Delivered` is deliberately
//! absent here; it happens only through delivery-note confirmation.

use shared::models::order::{OUTSOURCE_RETURN_MARKER, OrderRecord, OrderStatus, REWORK_MARKER};

use crate::orders::actions::{ActionContext, Apply, append_note, resolve_indices};
use crate::orders::error::OrderError;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Apply one target status to every order in the id set.
///
/// Validation of the whole set precedes the commit, so a single bad member
/// rejects the batch with zero mutation.
#[derive(Debug, Clone)]
pub struct TransitionAction {
    pub order_ids: Vec<String>,
    pub to: OrderStatus,
    /// Required (non-empty) when `to` is `Outsourced`
    pub vendor: Option<String>,
}

impl TransitionAction {
    pub fn single(order_id: impl Into<String>, to: OrderStatus) -> Self {
        Self {
            order_ids: vec![order_id.into()],
            to,
            vendor: None,
        }
    }

    pub fn outsource(order_ids: Vec<String>, vendor: impl Into<String>) -> Self {
        Self {
            order_ids,
            to: OrderStatus::Outsourced,
            vendor: Some(vendor.into()),
        }
    }
}

fn check_allowed(from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
    use OrderStatus::*;
    let allowed = matches!(
        (from, to),
        (Inbound, Processing)
            | (Processing | Returned, Outsourced)
            | (Processing | Returned, Finished)
            | (Outsourced, Processing)
            | (Finished, Returned)
    );
    if allowed {
        Ok(())
    } else {
        Err(OrderError::InvalidTransition { from, to })
    }
}

impl Apply for TransitionAction {
    /// Number of records transitioned
    type Output = usize;

    fn apply(
        &self,
        records: &[OrderRecord],
        _ctx: &ActionContext,
    ) -> Result<(Vec<OrderRecord>, usize), OrderError> {
        let indices = resolve_indices(records, &self.order_ids)?;

        let vendor = match self.to {
            OrderStatus::Outsourced => {
                let vendor = self.vendor.as_deref().unwrap_or("").trim();
                if vendor.is_empty() {
                    return Err(OrderError::VendorRequired);
                }
                validate_required_text(vendor, "vendor", MAX_NAME_LEN)?;
                Some(vendor.to_string())
            }
            _ => None,
        };

        for &idx in &indices {
            check_allowed(records[idx].status, self.to)?;
        }

        let mut next = records.to_vec();
        for &idx in &indices {
            let record = &mut next[idx];
            let from = record.status;
            match (from, self.to) {
                (OrderStatus::Outsourced, OrderStatus::Processing) => {
                    let returned_from = record.vendor.take().unwrap_or_default();
                    let marker = OUTSOURCE_RETURN_MARKER.replace("{}", &returned_from);
                    record.note = append_note(&record.note, &marker);
                }
                (_, OrderStatus::Outsourced) => {
                    record.vendor = vendor.clone();
                }
                (OrderStatus::Finished, OrderStatus::Returned) => {
                    record.note = REWORK_MARKER.to_string();
                }
                _ => {}
            }
            record.status = self.to;
            tracing::info!(order_id = %record.id, from = ?from, to = ?self.to, "Status transition");
        }
        Ok((next, indices.len()))
    }
}
