//! Entity module - Plain data types for the supply catalog.
//! These types are the interchange shape of the catalog: they serialize with
//! camelCase field names and carry no behaviour beyond simple lookups.

pub mod price_history;
pub mod product;
pub mod supplier;

pub use price_history::PriceHistoryEntry;
pub use product::{Product, SupplierPrice};
pub use supplier::Supplier;
