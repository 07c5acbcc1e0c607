//! Work-Order Record Model

use serde::{Deserialize, Serialize};

/// Workflow status of a work order
///
/// `Delivered` is terminal under the normal flow; it is only ever reached
/// through delivery-note confirmation, never through a bare transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// 受入 - received, waiting for the shop
    #[default]
    Inbound,
    /// 加工中 - on the shop floor
    Processing,
    /// 外协 - sent to an outside vendor
    Outsourced,
    /// 完工 - ready for delivery
    Finished,
    /// 已交付 - delivered against a delivery note
    Delivered,
    /// 返工 - returned for rework
    Returned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Inbound,
        OrderStatus::Processing,
        OrderStatus::Outsourced,
        OrderStatus::Finished,
        OrderStatus::Delivered,
        OrderStatus::Returned,
    ];

    /// Wire/export token, identical to the serde representation
    pub fn token(&self) -> &'static str {
        match self {
            OrderStatus::Inbound => "INBOUND",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Outsourced => "OUTSOURCED",
            OrderStatus::Finished => "FINISHED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Returned => "RETURNED",
        }
    }
}

/// Unit of measure (fixed small set)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    #[default]
    Pcs,
    Set,
    Kg,
    Meter,
    Sheet,
}

impl Unit {
    /// Token used in delimited files
    pub fn token(&self) -> &'static str {
        match self {
            Unit::Pcs => "pcs",
            Unit::Set => "set",
            Unit::Kg => "kg",
            Unit::Meter => "m",
            Unit::Sheet => "sheet",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown unit token: {0}")]
pub struct ParseUnitError(pub String);

impl std::str::FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pcs" | "pc" | "个" | "件" => Ok(Unit::Pcs),
            "set" | "套" => Ok(Unit::Set),
            "kg" | "公斤" => Ok(Unit::Kg),
            "m" | "meter" | "米" => Ok(Unit::Meter),
            "sheet" | "张" => Ok(Unit::Sheet),
            other => Err(ParseUnitError(other.to_string())),
        }
    }
}

// Note markers appended/set by workflow side effects.
// They live with the model because import/export and the UI read them back.
/// Appended to the new half of a split order
pub const SPLIT_MARKER: &str = "[拆分]";
/// Written when a finished order is pulled back for rework
pub const REWORK_MARKER: &str = "[返工]";
/// Appended when an outsourced order comes back in-house ({} = vendor)
pub const OUTSOURCE_RETURN_MARKER: &str = "[外协返回:{}]";

/// Work-order record - the single persisted entity of the system
///
/// Workflow fields come and go with status: `vendor` is present while
/// `Outsourced`, `delivery_note_id`/`delivered_on` appear together once a
/// delivery note has been issued, and `paid` is meaningful only from that
/// point on. A forced status correction can leave any combination behind,
/// so readers tolerate rather than assume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    /// Opaque unique id (UUID v4), immutable after creation
    pub id: String,
    /// Receipt date (YYYY-MM-DD)
    pub received_on: String,
    pub client: String,
    pub product: String,
    /// Machining process / specification text
    #[serde(default)]
    pub process: String,
    /// Quantity, always > 0
    pub quantity: f64,
    pub unit: Unit,
    /// Price per unit; treated as 0 everywhere when `is_sample`
    pub unit_price: f64,
    #[serde(default)]
    pub is_sample: bool,
    pub status: OrderStatus,
    #[serde(default)]
    pub note: String,
    /// Outsourcing vendor, present while status is `Outsourced`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Delivery note id, present once a note was issued for this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_note_id: Option<String>,
    /// Delivery date (YYYY-MM-DD), set exactly once at note confirmation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_on: Option<String>,
    /// Group payment flag, uniform across all records of one note
    #[serde(default)]
    pub paid: bool,
}

impl OrderRecord {
    /// Whether a delivery note has been issued for this record
    pub fn has_delivery_note(&self) -> bool {
        self.delivery_note_id.is_some()
    }

    /// Price per unit with the sample rule applied
    pub fn effective_unit_price(&self) -> f64 {
        if self.is_sample { 0.0 } else { self.unit_price }
    }
}

/// Registration payload for a brand-new record
///
/// The resolver in `shop-floor::pricing` may fill `unit_price`, `unit` and
/// `process` from history while the draft is still at its defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderDraft {
    /// Receipt date (YYYY-MM-DD); empty means "today"
    #[serde(default)]
    pub received_on: String,
    pub client: String,
    pub product: String,
    #[serde(default)]
    pub process: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub is_sample: bool,
    #[serde(default)]
    pub note: String,
}
