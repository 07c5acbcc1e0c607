//! Delivery-note projection over the record snapshot

use rust_decimal::Decimal;
use shared::models::delivery_note::DeliveryNote;
use shared::models::order::OrderRecord;

use crate::utils::money::{record_amount, to_decimal, to_f64};

/// All members carrying `note_id`, in snapshot order
pub fn note_members<'a>(records: &'a [OrderRecord], note_id: &str) -> Vec<&'a OrderRecord> {
    records
        .iter()
        .filter(|r| r.delivery_note_id.as_deref() == Some(note_id))
        .collect()
}

/// Project every delivery note present in the snapshot, most recent first
///
/// Per group: client and paid flag come from the first member (uniform by
/// invariant), the date is the delivery date when set and the earliest
/// receipt date otherwise, and the amount sums quantity x price over
/// non-sample members only. Descending id order approximates
/// most-recent-first because ids are date-prefixed.
pub fn delivery_notes(records: &[OrderRecord]) -> Vec<DeliveryNote> {
    let mut note_ids: Vec<&str> = Vec::new();
    for record in records {
        if let Some(id) = record.delivery_note_id.as_deref()
            && !note_ids.contains(&id)
        {
            note_ids.push(id);
        }
    }

    let mut notes: Vec<DeliveryNote> = note_ids
        .into_iter()
        .map(|note_id| project_note(records, note_id))
        .collect();
    notes.sort_by(|a, b| b.note_id.cmp(&a.note_id));
    notes
}

fn project_note(records: &[OrderRecord], note_id: &str) -> DeliveryNote {
    let members = note_members(records, note_id);

    let first = members[0];
    let date = first
        .delivered_on
        .clone()
        .or_else(|| members.iter().map(|m| m.received_on.clone()).min())
        .unwrap_or_default();

    let amount: Decimal = members.iter().map(|m| to_decimal(record_amount(m))).sum();

    DeliveryNote {
        note_id: note_id.to_string(),
        client: first.client.clone(),
        date,
        amount: to_f64(amount),
        item_count: members.len(),
        paid: first.paid,
    }
}
