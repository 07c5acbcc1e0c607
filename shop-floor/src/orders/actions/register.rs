//! Register a brand-new work order

use shared::models::order::{OrderDraft, OrderRecord, OrderStatus};

use crate::orders::actions::{ActionContext, Apply};
use crate::orders::error::OrderError;
use crate::utils::money::{validate_price, validate_quantity};
use crate::utils::time::parse_date;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text, validate_text};

/// Manual registration; new records enter at `Inbound` and are prepended
/// so the snapshot stays newest-first.
#[derive(Debug, Clone)]
pub struct RegisterOrderAction {
    pub draft: OrderDraft,
}

impl Apply for RegisterOrderAction {
    /// Id of the created record
    type Output = String;

    fn apply(
        &self,
        records: &[OrderRecord],
        ctx: &ActionContext,
    ) -> Result<(Vec<OrderRecord>, String), OrderError> {
        let draft = &self.draft;
        validate_required_text(&draft.client, "client", MAX_NAME_LEN)?;
        validate_required_text(&draft.product, "product", MAX_NAME_LEN)?;
        validate_text(&draft.process, "process", MAX_NOTE_LEN)?;
        validate_text(&draft.note, "note", MAX_NOTE_LEN)?;
        validate_quantity(draft.quantity)?;
        validate_price(draft.unit_price)?;

        let received_on = if draft.received_on.trim().is_empty() {
            ctx.today.clone()
        } else {
            parse_date(draft.received_on.trim())?;
            draft.received_on.trim().to_string()
        };

        let record = OrderRecord {
            id: shared::util::fresh_record_id(),
            received_on,
            client: draft.client.trim().to_string(),
            product: draft.product.trim().to_string(),
            process: draft.process.trim().to_string(),
            quantity: draft.quantity,
            unit: draft.unit,
            unit_price: draft.unit_price,
            is_sample: draft.is_sample,
            status: OrderStatus::Inbound,
            note: draft.note.clone(),
            vendor: None,
            delivery_note_id: None,
            delivered_on: None,
            paid: false,
        };
        let id = record.id.clone();

        tracing::info!(order_id = %id, client = %record.client, "Order registered");

        let mut next = Vec::with_capacity(records.len() + 1);
        next.push(record);
        next.extend_from_slice(records);
        Ok((next, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::order::Unit;

    fn draft(client: &str, product: &str, quantity: f64) -> OrderDraft {
        OrderDraft {
            client: client.to_string(),
            product: product.to_string(),
            quantity,
            ..OrderDraft::default()
        }
    }

    #[test]
    fn test_register_creates_inbound_record_with_fresh_id() {
        let ctx = ActionContext::on("2026-08-06");
        let action = RegisterOrderAction {
            draft: draft("客户A", "轴承座", 50.0),
        };
        let (next, id) = action.apply(&[], &ctx).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, id);
        assert_eq!(next[0].status, OrderStatus::Inbound);
        assert_eq!(next[0].received_on, "2026-08-06");
        assert_eq!(next[0].unit, Unit::Pcs);
        assert!(next[0].delivery_note_id.is_none());
    }

    #[test]
    fn test_register_prepends_newest_first() {
        let ctx = ActionContext::on("2026-08-06");
        let (snapshot, first) = RegisterOrderAction {
            draft: draft("客户A", "轴承座", 50.0),
        }
        .apply(&[], &ctx)
        .unwrap();
        let (snapshot, second) = RegisterOrderAction {
            draft: draft("客户B", "齿轮", 20.0),
        }
        .apply(&snapshot, &ctx)
        .unwrap();
        assert_eq!(snapshot[0].id, second);
        assert_eq!(snapshot[1].id, first);
    }

    #[test]
    fn test_register_rejects_missing_identity_fields() {
        let ctx = ActionContext::on("2026-08-06");
        assert!(matches!(
            RegisterOrderAction {
                draft: draft("", "轴承座", 50.0)
            }
            .apply(&[], &ctx),
            Err(OrderError::Validation(_))
        ));
        assert!(matches!(
            RegisterOrderAction {
                draft: draft("客户A", " ", 50.0)
            }
            .apply(&[], &ctx),
            Err(OrderError::Validation(_))
        ));
    }

    #[test]
    fn test_register_rejects_bad_quantity_and_date() {
        let ctx = ActionContext::on("2026-08-06");
        assert!(matches!(
            RegisterOrderAction {
                draft: draft("客户A", "轴承座", 0.0)
            }
            .apply(&[], &ctx),
            Err(OrderError::InvalidQuantity(_))
        ));

        let mut bad_date = draft("客户A", "轴承座", 5.0);
        bad_date.received_on = "08/06/2026".to_string();
        assert!(
            RegisterOrderAction { draft: bad_date }
                .apply(&[], &ctx)
                .is_err()
        );
    }
}
