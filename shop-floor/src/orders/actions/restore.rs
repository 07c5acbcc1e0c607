//! Bulk replacement and merge, used by backup restore and file import

use std::collections::HashSet;

use shared::models::order::OrderRecord;

use crate::orders::actions::{ActionContext, Apply};
use crate::orders::error::OrderError;

/// Discard the whole store and adopt the incoming set.
#[derive(Debug, Clone)]
pub struct ReplaceAllAction {
    pub records: Vec<OrderRecord>,
}

impl Apply for ReplaceAllAction {
    /// Size of the adopted set
    type Output = usize;

    fn apply(
        &self,
        _records: &[OrderRecord],
        _ctx: &ActionContext,
    ) -> Result<(Vec<OrderRecord>, usize), OrderError> {
        Ok((self.records.clone(), self.records.len()))
    }
}

/// Prepend an incoming set, optionally dropping records whose id is
/// already present.
///
/// Backup restore merges with `dedup_by_id = true`; plain delimited import
/// uses `false` — duplicate rows there are a documented limitation, not
/// something to silently fix.
#[derive(Debug, Clone)]
pub struct AppendRecordsAction {
    pub records: Vec<OrderRecord>,
    pub dedup_by_id: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    pub applied: usize,
    pub dropped: usize,
}

impl Apply for AppendRecordsAction {
    type Output = AppendOutcome;

    fn apply(
        &self,
        records: &[OrderRecord],
        _ctx: &ActionContext,
    ) -> Result<(Vec<OrderRecord>, AppendOutcome), OrderError> {
        let existing: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();

        let incoming: Vec<OrderRecord> = self
            .records
            .iter()
            .filter(|r| !self.dedup_by_id || !existing.contains(r.id.as_str()))
            .cloned()
            .collect();
        let outcome = AppendOutcome {
            applied: incoming.len(),
            dropped: self.records.len() - incoming.len(),
        };

        let mut next = incoming;
        next.extend_from_slice(records);
        Ok((next, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::order::{OrderStatus, Unit};

    fn record(id: &str) -> OrderRecord {
        OrderRecord {
            id: id.to_string(),
            received_on: "2026-08-01".to_string(),
            client: "客户A".to_string(),
            product: "外壳".to_string(),
            process: String::new(),
            quantity: 1.0,
            unit: Unit::Pcs,
            unit_price: 1.0,
            is_sample: false,
            status: OrderStatus::Inbound,
            note: String::new(),
            vendor: None,
            delivery_note_id: None,
            delivered_on: None,
            paid: false,
        }
    }

    fn ctx() -> ActionContext {
        ActionContext::on("2026-08-06")
    }

    #[test]
    fn test_replace_all_discards_previous() {
        let current = vec![record("a"), record("b")];
        let action = ReplaceAllAction {
            records: vec![record("x")],
        };
        let (next, count) = action.apply(&current, &ctx()).unwrap();
        assert_eq!(count, 1);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, "x");
    }

    #[test]
    fn test_append_dedup_law() {
        // store of size 3, backup of size 3 with 2 already present
        let current = vec![record("a"), record("b"), record("c")];
        let action = AppendRecordsAction {
            records: vec![record("a"), record("b"), record("x")],
            dedup_by_id: true,
        };
        let (next, outcome) = action.apply(&current, &ctx()).unwrap();
        assert_eq!(outcome, AppendOutcome { applied: 1, dropped: 2 });
        assert_eq!(next.len(), 3 + (3 - 2));
        // existing records untouched
        assert!(["a", "b", "c"].iter().all(|id| next.iter().any(|r| r.id == *id)));
    }

    #[test]
    fn test_append_without_dedup_keeps_duplicates() {
        let current = vec![record("a")];
        let action = AppendRecordsAction {
            records: vec![record("a")],
            dedup_by_id: false,
        };
        let (next, outcome) = action.apply(&current, &ctx()).unwrap();
        assert_eq!(outcome.dropped, 0);
        assert_eq!(next.len(), 2);
    }
}
