//! Reporting aggregates
//!
//! Two formulas, both pure derivations recomputed from the snapshot on
//! every query: delivered revenue for a month, and outstanding
//! receivables per client over unpaid delivery notes.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::models::order::OrderRecord;

use crate::delivery::ledger::unpaid_notes;
use crate::utils::money::{record_amount, to_decimal, to_f64};
use crate::utils::time::in_month;

/// Delivered revenue for one `YYYY-MM` month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyDeliveries {
    pub month: String,
    pub amount: f64,
    pub order_count: usize,
}

/// Sum of quantity x price over records delivered in the month
///
/// Sample records contribute 0. Records are selected by delivery date, so
/// a forced `Delivered` status without a date never skews a month.
pub fn monthly_deliveries(records: &[OrderRecord], month: &str) -> MonthlyDeliveries {
    let delivered = records.iter().filter(|r| {
        r.delivered_on
            .as_deref()
            .map(|d| in_month(d, month))
            .unwrap_or(false)
    });

    let mut amount = Decimal::ZERO;
    let mut order_count = 0;
    for record in delivered {
        amount += to_decimal(record_amount(record));
        order_count += 1;
    }
    MonthlyDeliveries {
        month: month.to_string(),
        amount: to_f64(amount),
        order_count,
    }
}

/// Unpaid balance of one client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientReceivable {
    pub client: String,
    pub amount: f64,
    pub note_count: usize,
}

/// Outstanding receivables per client, largest balance first
pub fn outstanding_receivables(records: &[OrderRecord]) -> Vec<ClientReceivable> {
    let mut by_client: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();
    for note in unpaid_notes(records) {
        let entry = by_client.entry(note.client).or_default();
        entry.0 += to_decimal(note.amount);
        entry.1 += 1;
    }

    let mut receivables: Vec<ClientReceivable> = by_client
        .into_iter()
        .map(|(client, (amount, note_count))| ClientReceivable {
            client,
            amount: to_f64(amount),
            note_count,
        })
        .collect();
    receivables.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));
    receivables
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::order::{OrderStatus, Unit};

    fn delivered(
        client: &str,
        note_id: &str,
        delivered_on: &str,
        quantity: f64,
        unit_price: f64,
        is_sample: bool,
        paid: bool,
    ) -> OrderRecord {
        OrderRecord {
            id: shared::util::fresh_record_id(),
            received_on: "2026-07-01".to_string(),
            client: client.to_string(),
            product: "零件".to_string(),
            process: String::new(),
            quantity,
            unit: Unit::Pcs,
            unit_price,
            is_sample,
            status: OrderStatus::Delivered,
            note: String::new(),
            vendor: None,
            delivery_note_id: Some(note_id.to_string()),
            delivered_on: Some(delivered_on.to_string()),
            paid,
        }
    }

    #[test]
    fn test_monthly_deliveries_filters_by_month_and_zeroes_samples() {
        let records = vec![
            delivered("客户A", "DN:20260805001", "2026-08-05", 10.0, 2.0, false, false),
            delivered("客户A", "DN:20260805001", "2026-08-05", 5.0, 100.0, true, false),
            delivered("客户B", "DN:20260701001", "2026-07-01", 10.0, 2.0, false, false),
        ];
        let report = monthly_deliveries(&records, "2026-08");
        assert_eq!(report.amount, 20.0);
        assert_eq!(report.order_count, 2); // the sample counts as an order
    }

    #[test]
    fn test_receivables_group_unpaid_notes_per_client() {
        let records = vec![
            delivered("客户A", "DN:20260805001", "2026-08-05", 10.0, 2.0, false, false),
            delivered("客户A", "DN:20260806001", "2026-08-06", 1.0, 5.0, false, false),
            delivered("客户B", "DN:20260806002", "2026-08-06", 8.0, 10.0, false, false),
            delivered("客户C", "DN:20260806003", "2026-08-06", 9.0, 9.0, false, true),
        ];
        let receivables = outstanding_receivables(&records);
        assert_eq!(receivables.len(), 2); // paid client C excluded
        assert_eq!(receivables[0].client, "客户B");
        assert_eq!(receivables[0].amount, 80.0);
        assert_eq!(receivables[1].client, "客户A");
        assert_eq!(receivables[1].amount, 25.0);
        assert_eq!(receivables[1].note_count, 2);
    }
}
