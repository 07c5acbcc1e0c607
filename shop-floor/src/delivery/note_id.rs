//! Delivery-note numbering
//!
//! Format: `DN:YYYYMMDD` + 3-digit suffix. The suffix is a per-day
//! monotonically increasing sequence derived from the ids already in the
//! snapshot and re-checked for uniqueness before acceptance, so two notes
//! issued the same day can never collide.

use std::collections::HashSet;

use shared::models::order::OrderRecord;

use crate::orders::error::OrderError;

pub const NOTE_PREFIX: &str = "DN:";

/// Highest suffix usable per day (3 digits)
const MAX_DAILY_SEQ: u32 = 999;

/// Next free note id for the day given by `stamp` (`YYYYMMDD`)
pub fn next_note_id(records: &[OrderRecord], stamp: &str) -> Result<String, OrderError> {
    let day_prefix = format!("{NOTE_PREFIX}{stamp}");

    let mut taken: HashSet<u32> = HashSet::new();
    let mut max_seen = 0u32;
    for record in records {
        let Some(note_id) = record.delivery_note_id.as_deref() else {
            continue;
        };
        let Some(suffix) = note_id.strip_prefix(&day_prefix) else {
            continue;
        };
        if let Ok(seq) = suffix.parse::<u32>() {
            taken.insert(seq);
            max_seen = max_seen.max(seq);
        }
    }

    let candidate = (max_seen + 1..=MAX_DAILY_SEQ).find(|seq| !taken.contains(seq));
    match candidate {
        Some(seq) => Ok(format!("{day_prefix}{seq:03}")),
        None => Err(OrderError::NoteSequenceExhausted(stamp.to_string())),
    }
}
