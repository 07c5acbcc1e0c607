//! Reconciliation queries over delivery notes
//!
//! The write side (the paid toggle) is an order action; these are the
//! read-side companions.

use shared::models::delivery_note::DeliveryNote;
use shared::models::order::OrderRecord;

use crate::orders::error::OrderError;

use super::aggregator::{delivery_notes, note_members};

/// Members of an existing note, for reprinting
///
/// A stale or mistyped id is a not-found condition, signalled to the
/// caller instead of yielding an empty note.
pub fn reprint(records: &[OrderRecord], note_id: &str) -> Result<Vec<OrderRecord>, OrderError> {
    let members = note_members(records, note_id);
    if members.is_empty() {
        return Err(OrderError::NoteNotFound(note_id.to_string()));
    }
    Ok(members.into_iter().cloned().collect())
}

/// Notes still awaiting payment, most recent first
pub fn unpaid_notes(records: &[OrderRecord]) -> Vec<DeliveryNote> {
    delivery_notes(records)
        .into_iter()
        .filter(|note| !note.paid)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::order::{OrderStatus, Unit};

    fn delivered(note_id: &str, paid: bool) -> OrderRecord {
        OrderRecord {
            id: shared::util::fresh_record_id(),
            received_on: "2026-08-01".to_string(),
            client: "客户A".to_string(),
            product: "外壳".to_string(),
            process: String::new(),
            quantity: 2.0,
            unit: Unit::Pcs,
            unit_price: 5.0,
            is_sample: false,
            status: OrderStatus::Delivered,
            note: String::new(),
            vendor: None,
            delivery_note_id: Some(note_id.to_string()),
            delivered_on: Some("2026-08-06".to_string()),
            paid,
        }
    }

    #[test]
    fn test_reprint_unknown_note_is_not_found() {
        let result = reprint(&[], "DN:20260806001");
        assert!(matches!(result, Err(OrderError::NoteNotFound(_))));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_reprint_returns_all_members() {
        let records = vec![
            delivered("DN:20260806001", false),
            delivered("DN:20260806001", false),
            delivered("DN:20260806002", false),
        ];
        let members = reprint(&records, "DN:20260806001").unwrap();
        assert_eq!(members.len(), 2);
    }

    #[test]
    fn test_unpaid_filter() {
        let records = vec![
            delivered("DN:20260806001", true),
            delivered("DN:20260806002", false),
        ];
        let unpaid = unpaid_notes(&records);
        assert_eq!(unpaid.len(), 1);
        assert_eq!(unpaid[0].note_id, "DN:20260806002");
    }
}
