//! Shared test utilities for `bbq-quotes`.
//!
//! This module provides small, hand-checked catalogs with sensible defaults
//! so that unit tests can assert exact prices.

use crate::{
    core::catalog::Catalog,
    entities::{PriceHistoryEntry, Product, Supplier, SupplierPrice},
};
use std::collections::HashMap;

/// Suppliers "A" through "E", named "Fornecedor A" .. "Fornecedor E".
pub fn sample_suppliers() -> Vec<Supplier> {
    ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(|id| Supplier::new(id, format!("Fornecedor {id}")))
        .collect()
}

/// Builds a product whose offers come from `(supplier_id, price)` pairs.
///
/// Supplier names follow the "Fornecedor {id}" convention.
pub fn product(id: &str, name: &str, category: &str, offers: &[(&str, f64)]) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        suppliers: offers
            .iter()
            .map(|(supplier_id, price)| {
                SupplierPrice::new(*supplier_id, format!("Fornecedor {supplier_id}"), *price)
            })
            .collect(),
    }
}

/// Three products across two categories:
///
/// * picanha (Carnes Nobres): A 80, B 75, D 82
/// * linguica (Embutidos): A 25, C 22, E 24
/// * maminha (Carnes Nobres): B 60, C 59, D 62
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            "picanha",
            "Picanha",
            "Carnes Nobres",
            &[("A", 80.0), ("B", 75.0), ("D", 82.0)],
        ),
        product(
            "linguica",
            "Linguiça Toscana",
            "Embutidos",
            &[("A", 25.0), ("C", 22.0), ("E", 24.0)],
        ),
        product(
            "maminha",
            "Maminha",
            "Carnes Nobres",
            &[("B", 60.0), ("C", 59.0), ("D", 62.0)],
        ),
    ]
}

/// Five observations for picanha, falling from 85 to 75.
pub fn picanha_history() -> Vec<PriceHistoryEntry> {
    [("01/06", 85.0), ("15/06", 82.0), ("01/07", 80.0), ("10/07", 78.0), ("13/07", 75.0)]
        .into_iter()
        .map(|(date, price)| PriceHistoryEntry::new(date, price))
        .collect()
}

/// The sample products and suppliers, with history recorded for picanha only.
///
/// # Panics
/// Panics if the fixture data fails validation, which would be a bug in the fixture.
#[allow(clippy::expect_used)]
pub fn sample_catalog() -> Catalog {
    let mut history = HashMap::new();
    history.insert("picanha".to_string(), picanha_history());
    Catalog::new(sample_suppliers(), sample_products(), history).expect("sample catalog is valid")
}

/// A catalog with the sample suppliers and the given products, no history.
///
/// # Panics
/// Panics if `products` fails validation.
#[allow(clippy::expect_used)]
pub fn catalog_with(products: Vec<Product>) -> Catalog {
    Catalog::new(sample_suppliers(), products, HashMap::new()).expect("test catalog is valid")
}
