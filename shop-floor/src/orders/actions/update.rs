//! Edit an existing record
//!
//! The edit screen replaces the descriptive and workflow fields wholesale.
//! Setting `status` here is the documented administrative override: it
//! bypasses the transition table exactly like `ForceStatusAction`, and the
//! resulting field combination is tolerated, not validated.

use shared::models::order::{OrderRecord, OrderStatus, Unit};

use crate::orders::actions::{ActionContext, Apply};
use crate::orders::error::OrderError;
use crate::utils::money::{validate_price, validate_quantity};
use crate::utils::time::parse_date;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text, validate_text};

/// Replacement field values for one record
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub received_on: String,
    pub client: String,
    pub product: String,
    pub process: String,
    pub quantity: f64,
    pub unit: Unit,
    pub unit_price: f64,
    pub is_sample: bool,
    pub note: String,
    pub status: OrderStatus,
    pub vendor: Option<String>,
}

impl From<&OrderRecord> for OrderUpdate {
    fn from(record: &OrderRecord) -> Self {
        Self {
            received_on: record.received_on.clone(),
            client: record.client.clone(),
            product: record.product.clone(),
            process: record.process.clone(),
            quantity: record.quantity,
            unit: record.unit,
            unit_price: record.unit_price,
            is_sample: record.is_sample,
            note: record.note.clone(),
            status: record.status,
            vendor: record.vendor.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateOrderAction {
    pub order_id: String,
    pub update: OrderUpdate,
}

impl Apply for UpdateOrderAction {
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

        let update = &self.update;
        validate_required_text(&update.client, "client", MAX_NAME_LEN)?;
        validate_required_text(&update.product, "product", MAX_NAME_LEN)?;
        validate_text(&update.process, "process", MAX_NOTE_LEN)?;
        validate_text(&update.note, "note", MAX_NOTE_LEN)?;
        validate_quantity(update.quantity)?;
        validate_price(update.unit_price)?;
        parse_date(&update.received_on)?;

        let mut next = records.to_vec();
        let record = &mut next[idx];
        if record.status != update.status {
            tracing::warn!(
                target: "audit",
                order_id = %record.id,
                from = ?record.status,
                to = ?update.status,
                "Status overridden through edit"
            );
        }
        record.received_on = update.received_on.clone();
        record.client = update.client.trim().to_string();
        record.product = update.product.trim().to_string();
        record.process = update.process.trim().to_string();
        record.quantity = update.quantity;
        record.unit = update.unit;
        record.unit_price = update.unit_price;
        record.is_sample = update.is_sample;
        record.note = update.note.clone();
        record.status = update.status;
        record.vendor = update.vendor.clone();
        Ok((next, ()))
    }
}
