//! Confirm delivery of a set of finished orders
//!
//! The only path to `Delivered`. Validates the candidate set, then either
//! reuses an existing note (reprint) or issues the next note id for the
//! day and stamps every member in one snapshot swap.

use shared::models::order::{OrderRecord, OrderStatus};

use crate::delivery::note_id::next_note_id;
use crate::orders::actions::{ActionContext, Apply, resolve_indices};
use crate::orders::error::OrderError;
use crate::utils::time::stamp_of;

#[derive(Debug, Clone)]
pub struct ConfirmDeliveryAction {
    pub order_ids: Vec<String>,
}

/// Outcome of a confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfirmation {
    pub note_id: String,
    pub delivered_on: String,
    /// True when the set already carried this note and nothing changed
    pub reprint: bool,
}

impl Apply for ConfirmDeliveryAction {
    type Output = DeliveryConfirmation;

    fn apply(
        &self,
        records: &[OrderRecord],
        ctx: &ActionContext,
    ) -> Result<(Vec<OrderRecord>, DeliveryConfirmation), OrderError> {
        let indices = resolve_indices(records, &self.order_ids)?;

        // Single-client check comes first: no id is generated and no record
        // touched for a mixed selection.
        let client = &records[indices[0]].client;
        for &idx in &indices[1..] {
            if &records[idx].client != client {
                return Err(OrderError::MixedClients(
                    client.clone(),
                    records[idx].client.clone(),
                ));
            }
        }

        // Reprint: every member already carries the same note id.
        let first_note = records[indices[0]].delivery_note_id.clone();
        if let Some(note_id) = first_note
            && indices
                .iter()
                .all(|&idx| records[idx].delivery_note_id.as_deref() == Some(note_id.as_str()))
        {
            let delivered_on = records[indices[0]]
                .delivered_on
                .clone()
                .unwrap_or_else(|| ctx.today.clone());
            tracing::info!(note_id = %note_id, members = indices.len(), "Delivery note reprint");
            return Ok((
                records.to_vec(),
                DeliveryConfirmation {
                    note_id,
                    delivered_on,
                    reprint: true,
                },
            ));
        }

        // New note: every member must be finished and not yet on a note.
        for &idx in &indices {
            let record = &records[idx];
            if record.status != OrderStatus::Finished || record.has_delivery_note() {
                return Err(OrderError::NotDeliverable(record.id.clone()));
            }
        }

        let note_id = next_note_id(records, &stamp_of(&ctx.today))?;
        let mut next = records.to_vec();
        for &idx in &indices {
            let record = &mut next[idx];
            record.delivery_note_id = Some(note_id.clone());
            record.delivered_on = Some(ctx.today.clone());
            record.status = OrderStatus::Delivered;
            record.paid = false;
        }

        tracing::info!(note_id = %note_id, members = indices.len(), client = %client, "Delivery confirmed");
        Ok((
            next,
            DeliveryConfirmation {
                note_id,
                delivered_on: ctx.today.clone(),
                reprint: false,
            },
        ))
    }
}
