//! Delete records, single or batch

use std::collections::HashSet;

use shared::models::order::OrderRecord;

use crate::orders::actions::{ActionContext, Apply, resolve_indices};
use crate::orders::error::OrderError;

/// Explicit deletion is the only way a record leaves the store.
#[derive(Debug, Clone)]
pub struct DeleteOrdersAction {
    pub order_ids: Vec<String>,
}

impl Apply for DeleteOrdersAction {
    /// Number of records removed
    type Output = usize;

    fn apply(
        &self,
        records: &[OrderRecord],
        _ctx: &ActionContext,
    ) -> Result<(Vec<OrderRecord>, usize), OrderError> {
        resolve_indices(records, &self.order_ids)?;

        let doomed: HashSet<&str> = self.order_ids.iter().map(String::as_str).collect();
        let next: Vec<OrderRecord> = records
            .iter()
            .filter(|r| !doomed.contains(r.id.as_str()))
            .cloned()
            .collect();
        let removed = records.len() - next.len();

        tracing::info!(removed, "Orders deleted");
        Ok((next, removed))
    }
}
