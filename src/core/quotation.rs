//! Quotation builder - An editable list of product/supplier line items.
//!
//! A line item snapshots the product name, category, supplier name and unit
//! price at the moment it is added, so later catalog edits never change a
//! quotation that is already being built. Each (product, supplier) pairing may
//! appear at most once.

use crate::{
    core::{catalog::Catalog, pricing},
    entities::{Product, SupplierPrice},
    errors::{Error, Result},
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// One entry of a quotation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationLineItem {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    /// Always at least 1
    pub quantity: u32,
    pub selected_supplier_id: String,
    pub selected_supplier_name: String,
    /// Supplier price when the item was added
    pub unit_price: f64,
    /// `unit_price * quantity`
    pub total_price: f64,
}

impl QuotationLineItem {
    fn new(product: &Product, offer: &SupplierPrice) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            category: product.category.clone(),
            quantity: 1,
            selected_supplier_id: offer.supplier_id.clone(),
            selected_supplier_name: offer.supplier_name.clone(),
            unit_price: offer.price,
            total_price: offer.price,
        }
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = self.unit_price * f64::from(quantity);
    }

    fn is_pairing(&self, product_id: &str, supplier_id: &str) -> bool {
        self.product_id == product_id && self.selected_supplier_id == supplier_id
    }
}

/// An in-progress quotation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Quotation {
    items: Vec<QuotationLineItem>,
}

impl Quotation {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[QuotationLineItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a product from a chosen supplier with quantity 1.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The product does not exist (`ProductNotFound`)
    /// - The supplier does not offer the product (`OfferNotFound`)
    /// - This product/supplier pairing is already in the quotation (`DuplicateEntry`)
    pub fn add(
        &mut self,
        catalog: &Catalog,
        product_id: &str,
        supplier_id: &str,
    ) -> Result<&QuotationLineItem> {
        let (product, offer) = catalog.require_offer(product_id, supplier_id)?;

        if self
            .items
            .iter()
            .any(|item| item.is_pairing(product_id, supplier_id))
        {
            warn!(product_id, supplier_id, "Rejected duplicate quotation entry");
            return Err(Error::DuplicateEntry {
                product_id: product_id.to_string(),
                supplier_id: supplier_id.to_string(),
            });
        }

        let item = QuotationLineItem::new(product, offer);
        debug!(product_id, supplier_id, unit_price = item.unit_price, "Added quotation item");
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Changes the quantity of the item at `index` and recomputes its total.
    ///
    /// # Errors
    /// Returns `Error::InvalidQuantity` if `quantity` is not a positive integer
    /// that fits a line item, and `Error::LineItemNotFound` for an unknown index.
    /// The item is left unchanged on error.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Result<&QuotationLineItem> {
        let valid = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(Error::InvalidQuantity { quantity })?;

        let item = self
            .items
            .get_mut(index)
            .ok_or(Error::LineItemNotFound { index })?;
        item.set_quantity(valid);
        debug!(index, quantity = valid, total = item.total_price, "Updated quotation quantity");
        Ok(&*item)
    }

    /// Removes the item at `index`; later items shift down by one.
    ///
    /// # Errors
    /// Returns `Error::LineItemNotFound` for an unknown index.
    pub fn remove(&mut self, index: usize) -> Result<QuotationLineItem> {
        if index >= self.items.len() {
            return Err(Error::LineItemNotFound { index });
        }
        let removed = self.items.remove(index);
        debug!(index, product_id = %removed.product_id, "Removed quotation item");
        Ok(removed)
    }

    /// Replaces the whole quotation with one item per product, each from its
    /// cheapest supplier at quantity 1. Previous items are discarded.
    pub fn generate_best(&mut self, catalog: &Catalog) {
        let discarded = self.items.len();
        self.items = pricing::cheapest_per_product(catalog)
            .into_iter()
            .map(|c| QuotationLineItem {
                product_id: c.product_id,
                product_name: c.product_name,
                category: c.category,
                quantity: 1,
                selected_supplier_id: c.supplier_id,
                selected_supplier_name: c.supplier_name,
                unit_price: c.cheapest_price,
                total_price: c.cheapest_price,
            })
            .collect();
        info!(items = self.items.len(), discarded, "Generated best-price quotation");
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all line item totals.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.total_price).sum()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_add_creates_snapshot_with_quantity_one() -> Result<()> {
        let catalog = sample_catalog();
        let mut quotation = Quotation::new();

        let item = quotation.add(&catalog, "picanha", "A")?;
        assert_eq!(item.product_name, "Picanha");
        assert_eq!(item.category, "Carnes Nobres");
        assert_eq!(item.selected_supplier_name, "Fornecedor A");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, 80.0);
        assert_eq!(item.total_price, 80.0);
        Ok(())
    }

    #[test]
    fn test_add_duplicate_pairing_fails() -> Result<()> {
        let catalog = sample_catalog();
        let mut quotation = Quotation::new();

        quotation.add(&catalog, "picanha", "B")?;
        let err = quotation.add(&catalog, "picanha", "B").unwrap_err();
        assert!(matches!(err, Error::DuplicateEntry { .. }));
        assert_eq!(quotation.len(), 1);

        // Same product from another supplier is a different pairing
        quotation.add(&catalog, "picanha", "A")?;
        assert_eq!(quotation.len(), 2);
        Ok(())
    }

    #[test]
    fn test_add_unknown_product_or_supplier() {
        let catalog = sample_catalog();
        let mut quotation = Quotation::new();

        let err = quotation.add(&catalog, "tofu", "A").unwrap_err();
        assert!(matches!(err, Error::ProductNotFound { .. }));

        let err = quotation.add(&catalog, "picanha", "C").unwrap_err();
        assert!(matches!(err, Error::OfferNotFound { .. }));
        assert!(err.is_not_found());
        assert!(quotation.is_empty());
    }

    #[test]
    fn test_set_quantity_recomputes_total() -> Result<()> {
        let catalog = sample_catalog();
        let mut quotation = Quotation::new();
        quotation.add(&catalog, "linguica", "C")?;

        let item = quotation.set_quantity(0, 4)?;
        assert_eq!(item.quantity, 4);
        assert_eq!(item.total_price, 88.0);
        Ok(())
    }

    #[test]
    fn test_set_quantity_rejects_non_positive() -> Result<()> {
        let catalog = sample_catalog();
        let mut quotation = Quotation::new();
        quotation.add(&catalog, "linguica", "C")?;
        quotation.set_quantity(0, 3)?;

        for bad in [0, -1, -100] {
            let err = quotation.set_quantity(0, bad).unwrap_err();
            assert!(matches!(err, Error::InvalidQuantity { quantity } if quantity == bad));
        }
        let err = quotation.set_quantity(0, i64::MAX).unwrap_err();
        assert!(matches!(err, Error::InvalidQuantity { .. }));

        let item = &quotation.items()[0];
        assert_eq!(item.quantity, 3);
        assert_eq!(item.total_price, 66.0);
        Ok(())
    }

    #[test]
    fn test_set_quantity_unknown_index() {
        let mut quotation = Quotation::new();
        let err = quotation.set_quantity(2, 1).unwrap_err();
        assert!(matches!(err, Error::LineItemNotFound { index: 2 }));
    }

    #[test]
    fn test_remove_middle_item_preserves_others() -> Result<()> {
        let catalog = sample_catalog();
        let mut quotation = Quotation::new();
        quotation.add(&catalog, "picanha", "A")?;
        quotation.add(&catalog, "linguica", "E")?;
        quotation.add(&catalog, "maminha", "D")?;
        quotation.set_quantity(2, 2)?;
        let first = quotation.items()[0].clone();
        let third = quotation.items()[2].clone();

        let removed = quotation.remove(1)?;
        assert_eq!(removed.product_id, "linguica");
        assert_eq!(quotation.len(), 2);
        assert_eq!(quotation.items()[0], first);
        assert_eq!(quotation.items()[1], third);
        assert_eq!(quotation.items()[1].total_price, 124.0);
        Ok(())
    }

    #[test]
    fn test_remove_unknown_index() {
        let mut quotation = Quotation::new();
        assert!(matches!(
            quotation.remove(0).unwrap_err(),
            Error::LineItemNotFound { index: 0 }
        ));
    }

    #[test]
    fn test_generate_best_replaces_items() -> Result<()> {
        let catalog = sample_catalog();
        let mut quotation = Quotation::new();
        quotation.add(&catalog, "picanha", "D")?;
        quotation.set_quantity(0, 10)?;

        quotation.generate_best(&catalog);
        assert_eq!(quotation.len(), 3);

        let chosen: Vec<(&str, &str, f64, u32)> = quotation
            .items()
            .iter()
            .map(|i| {
                (
                    i.product_id.as_str(),
                    i.selected_supplier_id.as_str(),
                    i.unit_price,
                    i.quantity,
                )
            })
            .collect();
        assert_eq!(
            chosen,
            vec![
                ("picanha", "B", 75.0, 1),
                ("linguica", "C", 22.0, 1),
                ("maminha", "C", 59.0, 1),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_total() -> Result<()> {
        let catalog = sample_catalog();
        let mut quotation = Quotation::new();
        assert_eq!(quotation.total(), 0.0);

        quotation.add(&catalog, "picanha", "B")?;
        quotation.add(&catalog, "linguica", "A")?;
        quotation.set_quantity(1, 3)?;

        let expected: f64 = quotation
            .items()
            .iter()
            .map(|i| i.unit_price * f64::from(i.quantity))
            .sum();
        assert_eq!(quotation.total(), expected);
        assert_eq!(quotation.total(), 150.0);
        // Repeated calls without mutation agree
        assert_eq!(quotation.total(), quotation.total());
        Ok(())
    }

    #[test]
    fn test_snapshot_survives_catalog_edit() -> Result<()> {
        use crate::core::session::{RoleKind, SessionState};

        let mut catalog = sample_catalog();
        let mut quotation = Quotation::new();
        quotation.add(&catalog, "picanha", "B")?;

        let mut session = SessionState::new();
        session.login(&catalog, RoleKind::Supplier, Some("B"))?;
        catalog.update_supplier_price(&session, "picanha", 60.0)?;

        assert_eq!(quotation.items()[0].unit_price, 75.0);
        Ok(())
    }

    #[test]
    fn test_clear() {
        let catalog = sample_catalog();
        let mut quotation = Quotation::new();
        quotation.generate_best(&catalog);
        assert_eq!(quotation.len(), 3);
        quotation.clear();
        assert!(quotation.is_empty());
        assert_eq!(quotation.total(), 0.0);
    }
}
