//! Order engine errors

use shared::models::order::OrderStatus;
use thiserror::Error;

/// Errors raised by order actions and delivery queries
///
/// Every error is raised before any mutation: a failing action leaves the
/// snapshot exactly as it was.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Delivery note not found: {0}")]
    NoteNotFound(String),

    #[error("Invalid status transition: {from:?} -> {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Vendor name is required when outsourcing")]
    VendorRequired,

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(f64),

    #[error("Unit price must be non-negative, got {0}")]
    InvalidPrice(f64),

    #[error("Split quantity {requested} must be between 0 and {available} exclusive")]
    InvalidSplitQuantity { requested: f64, available: f64 },

    #[error("No orders selected")]
    EmptySelection,

    #[error("Delivery selection mixes clients: {0} and {1}")]
    MixedClients(String, String),

    #[error("Order {0} is not ready for delivery")]
    NotDeliverable(String),

    #[error("Daily delivery-note sequence exhausted for {0}")]
    NoteSequenceExhausted(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl OrderError {
    /// Whether this is a not-found condition (vs. a validation rejection)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OrderError::OrderNotFound(_) | OrderError::NoteNotFound(_)
        )
    }
}

pub type OrderResult<T> = Result<T, OrderError>;
