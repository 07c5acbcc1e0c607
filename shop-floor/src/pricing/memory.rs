//! Price-memory autofill
//!
//! Advisory convenience at registration time: once the draft names a
//! client and a product, the most recent priced order for the same pair
//! suggests its price, unit and process. The resolver is read-only and
//! never overwrites anything the user already typed.

use shared::models::order::{OrderDraft, OrderRecord, Unit};

/// Historical values proposed for a draft
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSuggestion {
    pub unit_price: f64,
    pub unit: Unit,
    pub process: String,
}

/// Most recent record matching the draft's client and product
///
/// Samples and unpriced records never teach a price. The snapshot is
/// newest-first, so the first hit is the most recent one.
pub fn lookup(records: &[OrderRecord], client: &str, product: &str) -> Option<PriceSuggestion> {
    let client = client.trim();
    let product = product.trim();
    if client.is_empty() || product.is_empty() {
        return None;
    }

    records
        .iter()
        .find(|r| r.client == client && r.product == product && !r.is_sample && r.unit_price > 0.0)
        .map(|r| PriceSuggestion {
            unit_price: r.unit_price,
            unit: r.unit,
            process: r.process.clone(),
        })
}

/// Fill a draft in place from history, respecting user input
///
/// Price and unit are supplied only while the draft's price is still at
/// its default (0); the process text only while the draft's is empty.
pub fn autofill(draft: &mut OrderDraft, records: &[OrderRecord]) {
    if draft.unit_price != 0.0 {
        return;
    }
    let Some(hit) = lookup(records, &draft.client, &draft.product) else {
        return;
    };

    draft.unit_price = hit.unit_price;
    draft.unit = hit.unit;
    if draft.process.trim().is_empty() {
        draft.process = hit.process;
    }
}
