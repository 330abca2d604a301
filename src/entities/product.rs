//! Product entity - A catalog item quoted by one or more suppliers.
//!
//! Each product carries the list of suppliers that offer it together with
//! their current price. The order of that list is insertion order; it matters
//! for display and for breaking ties between equally cheap suppliers.

use serde::{Deserialize, Serialize};

/// One supplier's offer for a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPrice {
    /// Id of the supplier making the offer
    pub supplier_id: String,
    /// Supplier display name, denormalized for display
    pub supplier_name: String,
    /// Unit price quoted by the supplier
    pub price: f64,
}

impl SupplierPrice {
    pub fn new(supplier_id: impl Into<String>, supplier_name: impl Into<String>, price: f64) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            supplier_name: supplier_name.into(),
            price,
        }
    }
}

/// Catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (e.g., "picanha")
    pub id: String,
    /// Display name (e.g., "Picanha")
    pub name: String,
    /// Category label (e.g., "Carnes Nobres")
    pub category: String,
    /// Supplier offers, in insertion order. Never empty in a valid catalog.
    pub suppliers: Vec<SupplierPrice>,
}

impl Product {
    /// Returns the offer made by `supplier_id`, if that supplier carries this product.
    #[must_use]
    pub fn offer(&self, supplier_id: &str) -> Option<&SupplierPrice> {
        self.suppliers.iter().find(|s| s.supplier_id == supplier_id)
    }

    /// Mutable variant of [`Product::offer`].
    pub fn offer_mut(&mut self, supplier_id: &str) -> Option<&mut SupplierPrice> {
        self.suppliers
            .iter_mut()
            .find(|s| s.supplier_id == supplier_id)
    }

    /// Returns the cheapest offer for this product.
    ///
    /// Ties keep the first offer in insertion order. Returns `None` only for a
    /// product without suppliers, which a validated catalog never contains.
    #[must_use]
    pub fn cheapest_offer(&self) -> Option<&SupplierPrice> {
        self.suppliers.iter().fold(None, |best, current| match best {
            Some(b) if b.price <= current.price => Some(b),
            _ => Some(current),
        })
    }
}
