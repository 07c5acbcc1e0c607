//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary and quantity arithmetic goes through `Decimal` internally,
//! then converts back to `f64` for storage/serialization.

use rust_decimal::prelude::*;
use shared::models::order::OrderRecord;

use crate::orders::error::OrderError;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price per unit
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per record
pub const MAX_QUANTITY: f64 = 1_000_000.0;

/// Convert f64 to Decimal for precise arithmetic
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimals
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Round a monetary f64 to 2 decimals (half-up)
pub fn round2(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Line amount of one record: quantity x unit price, 0 for samples
pub fn record_amount(record: &OrderRecord) -> f64 {
    if record.is_sample {
        return 0.0;
    }
    to_f64(to_decimal(record.quantity) * to_decimal(record.unit_price))
}

/// Precise quantity subtraction (split arithmetic)
pub fn sub_quantity(a: f64, b: f64) -> f64 {
    (to_decimal(a) - to_decimal(b)).to_f64().unwrap_or(0.0)
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field: &str) -> Result<(), OrderError> {
    if !value.is_finite() {
        return Err(OrderError::Validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

/// Validate a quantity: finite, positive, within bounds
pub fn validate_quantity(quantity: f64) -> Result<(), OrderError> {
    require_finite(quantity, "quantity")?;
    if quantity <= 0.0 {
        return Err(OrderError::InvalidQuantity(quantity));
    }
    if quantity > MAX_QUANTITY {
        return Err(OrderError::Validation(format!(
            "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
        )));
    }
    Ok(())
}

/// Validate a unit price: finite, non-negative, within bounds
pub fn validate_price(price: f64) -> Result<(), OrderError> {
    require_finite(price, "unit_price")?;
    if price < 0.0 {
        return Err(OrderError::InvalidPrice(price));
    }
    if price > MAX_PRICE {
        return Err(OrderError::Validation(format!(
            "unit_price exceeds maximum allowed ({MAX_PRICE}), got {price}"
        )));
    }
    Ok(())
}
