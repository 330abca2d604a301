//! Catalog store - Products, suppliers and per-product price history.
//!
//! A [`Catalog`] is validated once when it is built and is read-only afterwards,
//! with the single exception of supplier price edits made through
//! [`Catalog::update_supplier_price`]. Edits are held in memory only.

use crate::{
    core::session::SessionState,
    entities::{PriceHistoryEntry, Product, Supplier, SupplierPrice},
    errors::{Error, Result},
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// The in-memory supply catalog.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    suppliers: Vec<Supplier>,
    products: Vec<Product>,
    price_history: HashMap<String, Vec<PriceHistoryEntry>>,
}

impl Catalog {
    /// Builds a catalog after checking its integrity.
    ///
    /// # Errors
    /// Returns `Error::Config` if:
    /// - Two suppliers or two products share an id
    /// - A product has no supplier offers, or the same supplier twice
    /// - An offer references an unregistered supplier
    /// - History is recorded for an unknown product
    ///
    /// Returns `Error::InvalidPrice` if any offer or history price is negative or not finite.
    pub fn new(
        suppliers: Vec<Supplier>,
        products: Vec<Product>,
        price_history: HashMap<String, Vec<PriceHistoryEntry>>,
    ) -> Result<Self> {
        let mut supplier_ids = HashSet::new();
        for supplier in &suppliers {
            if !supplier_ids.insert(supplier.id.as_str()) {
                return Err(config_error(format!("Duplicate supplier id '{}'", supplier.id)));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &products {
            if !product_ids.insert(product.id.as_str()) {
                return Err(config_error(format!("Duplicate product id '{}'", product.id)));
            }
            validate_offers(product, &supplier_ids)?;
        }

        for (product_id, entries) in &price_history {
            if !product_ids.contains(product_id.as_str()) {
                return Err(config_error(format!(
                    "Price history recorded for unknown product '{product_id}'"
                )));
            }
            for entry in entries {
                validate_price(entry.price)?;
            }
        }

        debug!(
            suppliers = suppliers.len(),
            products = products.len(),
            histories = price_history.len(),
            "Catalog validated"
        );

        Ok(Self {
            suppliers,
            products,
            price_history,
        })
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All registered suppliers, in catalog order.
    #[must_use]
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Finds a product by id.
    #[must_use]
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Finds a supplier by id.
    #[must_use]
    pub fn supplier(&self, supplier_id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == supplier_id)
    }

    /// Like [`Catalog::product`], but a missing product is an error.
    ///
    /// # Errors
    /// Returns `Error::ProductNotFound` if no product has this id.
    pub fn require_product(&self, product_id: &str) -> Result<&Product> {
        self.product(product_id)
            .ok_or_else(|| Error::ProductNotFound {
                id: product_id.to_string(),
            })
    }

    /// Like [`Catalog::supplier`], but a missing supplier is an error.
    ///
    /// # Errors
    /// Returns `Error::SupplierNotFound` if no supplier has this id.
    pub fn require_supplier(&self, supplier_id: &str) -> Result<&Supplier> {
        self.supplier(supplier_id)
            .ok_or_else(|| Error::SupplierNotFound {
                id: supplier_id.to_string(),
            })
    }

    /// Looks up a product together with one supplier's offer for it.
    ///
    /// # Errors
    /// Returns `Error::ProductNotFound` for an unknown product and
    /// `Error::OfferNotFound` when the supplier does not carry it.
    pub fn require_offer(
        &self,
        product_id: &str,
        supplier_id: &str,
    ) -> Result<(&Product, &SupplierPrice)> {
        let product = self.require_product(product_id)?;
        let offer = product
            .offer(supplier_id)
            .ok_or_else(|| Error::OfferNotFound {
                product_id: product_id.to_string(),
                supplier_id: supplier_id.to_string(),
            })?;
        Ok((product, offer))
    }

    /// Returns the chronologically ordered price history of a product.
    /// A known product with no recorded history yields an empty slice.
    ///
    /// # Errors
    /// Returns `Error::ProductNotFound` if the product does not exist.
    pub fn price_history(&self, product_id: &str) -> Result<&[PriceHistoryEntry]> {
        self.require_product(product_id)?;
        Ok(self
            .price_history
            .get(product_id)
            .map_or(&[][..], Vec::as_slice))
    }

    /// Changes the logged-in supplier's price for one of its products.
    ///
    /// Only a supplier session may edit prices, and only its own offer.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The session is not a supplier session (`PermissionDenied`)
    /// - The price is negative or not finite (`InvalidPrice`)
    /// - The product does not exist (`ProductNotFound`)
    /// - The supplier does not offer the product (`OfferNotFound`)
    pub fn update_supplier_price(
        &mut self,
        session: &SessionState,
        product_id: &str,
        new_price: f64,
    ) -> Result<&SupplierPrice> {
        let supplier_id = session.require_supplier()?;
        validate_price(new_price)?;

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| Error::ProductNotFound {
                id: product_id.to_string(),
            })?;

        let Some(offer) = product.offer_mut(supplier_id) else {
            warn!(product_id, supplier_id, "Price edit rejected: supplier does not offer product");
            return Err(Error::OfferNotFound {
                product_id: product_id.to_string(),
                supplier_id: supplier_id.to_string(),
            });
        };

        info!(
            product_id,
            supplier_id,
            old_price = offer.price,
            new_price,
            "Supplier price updated"
        );
        offer.price = new_price;
        Ok(&*offer)
    }
}

/// Checks that a price is finite and non-negative.
///
/// # Errors
/// Returns `Error::InvalidPrice` otherwise.
pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::InvalidPrice { price });
    }
    Ok(())
}

fn validate_offers(product: &Product, registered: &HashSet<&str>) -> Result<()> {
    if product.suppliers.is_empty() {
        return Err(config_error(format!(
            "Product '{}' has no suppliers",
            product.id
        )));
    }

    let mut seen = HashSet::new();
    for offer in &product.suppliers {
        if !seen.insert(offer.supplier_id.as_str()) {
            return Err(config_error(format!(
                "Product '{}' lists supplier '{}' more than once",
                product.id, offer.supplier_id
            )));
        }
        if !registered.contains(offer.supplier_id.as_str()) {
            return Err(config_error(format!(
                "Product '{}' references unknown supplier '{}'",
                product.id, offer.supplier_id
            )));
        }
        validate_price(offer.price)?;
    }
    Ok(())
}

fn config_error(message: String) -> Error {
    Error::Config { message }
}
