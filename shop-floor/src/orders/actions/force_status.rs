//! Forced status correction
//!
//! Administrative escape hatch: sets any of the six statuses directly,
//! bypassing the transition table and its side effects. Any stored field
//! combination becomes reachable this way, so every reader of workflow
//! fields tolerates inconsistency instead of assuming it away. Kept as a
//! separately named operation so the guarded path stays auditable.

use shared::models::order::{OrderRecord, OrderStatus};

use crate::orders::actions::{ActionContext, Apply};
use crate::orders::error::OrderError;

#[derive(Debug, Clone)]
pub struct ForceStatusAction {
    pub order_id: String,
    pub status: OrderStatus,
}

impl Apply for ForceStatusAction {
    type Output = ();

    fn apply(
        &self,
        records: &[OrderRecord],
        _ctx: &ActionContext,
    ) -> Result<(Vec<OrderRecord>, ()), OrderError> {
        let idx = records
            .iter()
            .position(|r| r.id == self.order_id)
            .ok_or_else(|| OrderError::OrderNotFound(self.order_id.clone()))?;

        let mut next = records.to_vec();
        let from = next[idx].status;
        next[idx].status = self.status;

        tracing::warn!(
            target: "audit",
            order_id = %self.order_id,
            from = ?from,
            to = ?self.status,
            "Forced status correction"
        );
        Ok((next, ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::order::Unit;

    fn record(id: &str, status: OrderStatus) -> OrderRecord {
        OrderRecord {
            id: id.to_string(),
            received_on: "2026-08-01".to_string(),
            client: "客户A".to_string(),
            product: "外壳".to_string(),
            process: String::new(),
            quantity: 1.0,
            unit: Unit::Pcs,
            unit_price: 2.0,
            is_sample: false,
            status,
            note: String::new(),
            vendor: None,
            delivery_note_id: None,
            delivered_on: None,
            paid: false,
        }
    }

    #[test]
    fn test_force_bypasses_the_table() {
        let records = vec![record("a", OrderStatus::Inbound)];
        // Inbound -> Delivered is never allowed by the guarded path.
        let (next, ()) = ForceStatusAction {
            order_id: "a".to_string(),
            status: OrderStatus::Delivered,
        }
        .apply(&records, &ActionContext::on("2026-08-06"))
        .unwrap();
        assert_eq!(next[0].status, OrderStatus::Delivered);
        // No delivery-note side effects were invented.
        assert!(next[0].delivery_note_id.is_none());
        assert!(next[0].delivered_on.is_none());
    }

    #[test]
    fn test_force_unknown_order() {
        let result = ForceStatusAction {
            order_id: "ghost".to_string(),
            status: OrderStatus::Inbound,
        }
        .apply(&[], &ActionContext::on("2026-08-06"));
        assert!(matches!(result, Err(OrderError::OrderNotFound(_))));
    }
}
