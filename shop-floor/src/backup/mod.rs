//! Backup export and restore
//!
//! A backup file is a plain JSON array of records, field-for-field the
//! in-memory shape. Restore either replaces the store or merges with
//! dedup by id; a malformed file aborts with zero records applied.

use shared::models::order::OrderRecord;
use thiserror::Error;

use crate::orders::actions::{AppendOutcome, AppendRecordsAction, ReplaceAllAction};
use crate::orders::book::OrderBook;
use crate::orders::error::OrderError;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Backup root must be a JSON array")]
    NotAnArray,

    #[error("Malformed backup: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Parse a backup payload, rejecting anything but an array of records
pub fn parse_backup(raw: &str) -> Result<Vec<OrderRecord>, BackupError> {
    let root: serde_json::Value = serde_json::from_str(raw)?;
    if !root.is_array() {
        return Err(BackupError::NotAnArray);
    }
    Ok(serde_json::from_value(root)?)
}

/// Serialize the snapshot for export
pub fn export_backup(records: &[OrderRecord]) -> String {
    // Vec<OrderRecord> serialization cannot fail
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}

/// Restore mode: drop everything and adopt the backup
pub fn restore_replace(book: &OrderBook, raw: &str) -> Result<usize, BackupError> {
    let records = parse_backup(raw)?;
    let count = book.apply(&ReplaceAllAction { records })?;
    tracing::warn!(target: "audit", count, "Backup restored (replace)");
    Ok(count)
}

/// Restore mode: merge, dropping records whose id already exists
pub fn restore_append(book: &OrderBook, raw: &str) -> Result<AppendOutcome, BackupError> {
    let records = parse_backup(raw)?;
    let outcome = book.apply(&AppendRecordsAction {
        records,
        dedup_by_id: true,
    })?;
    tracing::warn!(
        target: "audit",
        applied = outcome.applied,
        dropped = outcome.dropped,
        "Backup restored (append)"
    );
    Ok(outcome)
}
