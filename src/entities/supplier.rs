//! Supplier entity - A vendor that quotes prices for catalog products.

use serde::{Deserialize, Serialize};

/// A registered supplier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Unique identifier (e.g., "A")
    pub id: String,
    /// Display name (e.g., "Fornecedor A")
    pub name: String,
}

impl Supplier {
    /// Creates a supplier from its id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
