//! Delimited-file exchange (import and export)

pub mod export;
pub mod import;

pub use export::export_delimited;
pub use import::{ImportError, parse_delimited};

/// Localized boolean tokens used in delimited files
pub const YES: &str = "是";
pub const NO: &str = "否";
