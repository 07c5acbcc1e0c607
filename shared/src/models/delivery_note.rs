//! Delivery Note Projection
//!
//! A delivery note is never stored on its own. It exists only as long as
//! at least one record carries its id, and is recomputed from the current
//! record snapshot on every query.

use serde::{Deserialize, Serialize};

/// Read-time projection of one delivery-note group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryNote {
    /// Group id, format `DN:YYYYMMDD` + 3-digit daily sequence
    pub note_id: String,
    /// Client name, identical across members (enforced at creation)
    pub client: String,
    /// Delivery date of the members, else the group's earliest receipt date
    pub date: String,
    /// Sum of quantity x unit price over non-sample members, 2 decimals
    pub amount: f64,
    pub item_count: usize,
    /// Shared group payment flag
    pub paid: bool,
}
