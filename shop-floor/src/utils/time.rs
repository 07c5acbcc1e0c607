//! Date helpers
//!
//! Dates travel through the system as `YYYY-MM-DD` strings; conversion and
//! validation happen at the edges, the engine compares lexicographically.

use chrono::NaiveDate;

use crate::orders::error::OrderError;

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> Result<NaiveDate, OrderError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| OrderError::Validation(format!("Invalid date format: {date}")))
}

/// Normalize loosely formatted import dates (`2026/8/3`, `2026-8-3`) to
/// `YYYY-MM-DD`. Returns `None` when the cell is not a date at all.
pub fn normalize_date(raw: &str) -> Option<String> {
    let cleaned = raw.trim().replace('/', "-");
    NaiveDate::parse_from_str(&cleaned, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Whether a `YYYY-MM-DD` date falls in a `YYYY-MM` month
pub fn in_month(date: &str, month: &str) -> bool {
    date.len() >= 7 && date[..7] == *month
}

/// Compact `YYYYMMDD` stamp of a `YYYY-MM-DD` date (note-id composition)
pub fn stamp_of(date: &str) -> String {
    date.replace('-', "")
}
