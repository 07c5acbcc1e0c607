//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use crate::orders::error::OrderError;

// ── Text length limits ──────────────────────────────────────────────

/// Client, product and vendor names
pub const MAX_NAME_LEN: usize = 200;

/// Notes and process descriptions
pub const MAX_NOTE_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), OrderError> {
    if value.trim().is_empty() {
        return Err(OrderError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(OrderError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that a string, possibly empty, is within the length limit.
pub fn validate_text(value: &str, field: &str, max_len: usize) -> Result<(), OrderError> {
    if value.len() > max_len {
        return Err(OrderError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}
