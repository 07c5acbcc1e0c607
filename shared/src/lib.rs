//! Shared types for the shop-floor workspace
//!
//! Domain models and small utilities used across crates: the work-order
//! record, its status vocabulary, the derived delivery-note projection,
//! and sync-state signalling for the store port.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::delivery_note::DeliveryNote;
pub use models::order::{OrderDraft, OrderRecord, OrderStatus, ParseUnitError, Unit};
pub use models::sync::{Connectivity, SyncState};
