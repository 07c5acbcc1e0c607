//! Toggle the payment flag of a delivery-note group
//!
//! The single writer of `paid`: the group flag flips and fans out to every
//! member record in one snapshot swap, which is what keeps the per-record
//! copies uniform.

use shared::models::order::OrderRecord;

use crate::orders::actions::{ActionContext, Apply};
use crate::orders::error::OrderError;

#[derive(Debug, Clone)]
pub struct TogglePaidAction {
    pub note_id: String,
}

impl Apply for TogglePaidAction {
    /// The new group value
    type Output = bool;

    fn apply(
        &self,
        records: &[OrderRecord],
        _ctx: &ActionContext,
    ) -> Result<(Vec<OrderRecord>, bool), OrderError> {
        let mut member_indices = Vec::new();
        for (idx, record) in records.iter().enumerate() {
            if record.delivery_note_id.as_deref() == Some(self.note_id.as_str()) {
                member_indices.push(idx);
            }
        }
        if member_indices.is_empty() {
            return Err(OrderError::NoteNotFound(self.note_id.clone()));
        }

        let new_value = !records[member_indices[0]].paid;
        let mut next = records.to_vec();
        for &idx in &member_indices {
            next[idx].paid = new_value;
        }

        tracing::info!(
            note_id = %self.note_id,
            paid = new_value,
            members = member_indices.len(),
            "Payment flag toggled"
        );
        Ok((next, new_value))
    }
}
