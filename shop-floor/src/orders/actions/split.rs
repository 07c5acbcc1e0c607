//! Split one order into two, conserving quantity

use shared::models::order::{OrderRecord, SPLIT_MARKER};

use crate::orders::actions::{ActionContext, Apply, append_note};
use crate::orders::error::OrderError;
use crate::utils::money::sub_quantity;

/// Carve `quantity` off an existing order into a new record.
///
/// The new record copies every field except id and quantity; both halves
/// keep the pre-split status, so workflow progress is never reset.
#[derive(Debug, Clone)]
pub struct SplitOrderAction {
    pub order_id: String,
    pub quantity: f64,
}

impl Apply for SplitOrderAction {
    /// Id of the newly created half
    type Output = String;

    fn apply(
        &self,
        records: &[OrderRecord],
        _ctx: &ActionContext,
    ) -> Result<(Vec<OrderRecord>, String), OrderError> {
        let idx = records
            .iter()
            .position(|r| r.id == self.order_id)
            .ok_or_else(|| OrderError::OrderNotFound(self.order_id.clone()))?;
        let source = &records[idx];

        if !self.quantity.is_finite() || self.quantity <= 0.0 || self.quantity >= source.quantity {
            return Err(OrderError::InvalidSplitQuantity {
                requested: self.quantity,
                available: source.quantity,
            });
        }

        let mut split_off = source.clone();
        split_off.id = shared::util::fresh_record_id();
        split_off.quantity = self.quantity;
        split_off.note = append_note(&source.note, SPLIT_MARKER);
        let new_id = split_off.id.clone();

        tracing::info!(
            order_id = %self.order_id,
            new_id = %new_id,
            split = self.quantity,
            remainder = sub_quantity(source.quantity, self.quantity),
            "Order split"
        );

        let mut next = records.to_vec();
        next[idx].quantity = sub_quantity(source.quantity, self.quantity);
        next.insert(idx + 1, split_off);
        Ok((next, new_id))
    }
}
