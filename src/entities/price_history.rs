//! Price history entity - One dated price observation for a product.

use serde::{Deserialize, Serialize};

/// A `(date label, price)` pair. Sequences of entries are kept in
/// chronological order per product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryEntry {
    /// Display label for the observation date (e.g., "01/06")
    pub date: String,
    /// Observed price
    pub price: f64,
}

impl PriceHistoryEntry {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
        }
    }
}
