//! Pricing helpers

pub mod memory;

pub use memory::{PriceSuggestion, autofill, lookup};
