//! Pricing queries - Pure derivations over the catalog.
//!
//! This module answers the price-comparison questions administrators and
//! suppliers ask: which supplier is cheapest for each product, what a given
//! supplier offers, how categories compare, and the dashboard summary. Every
//! function is a linear scan over the catalog and never mutates it.
//!
//! Aggregates over an empty set are reported as `Error::NoData` rather than as
//! a meaningless number.

use crate::{
    core::catalog::Catalog,
    entities::{Product, SupplierPrice},
    errors::{Error, Result},
};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A product as seen by one supplier, annotated with that supplier's price.
#[derive(Clone, Debug, PartialEq)]
pub struct SupplierProduct<'a> {
    pub product: &'a Product,
    pub price: f64,
}

/// The cheapest offer for one product.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheapestPrice {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub cheapest_price: f64,
    pub supplier_id: String,
    pub supplier_name: String,
}

impl CheapestPrice {
    fn new(product: &Product, offer: &SupplierPrice) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            category: product.category.clone(),
            cheapest_price: offer.price,
            supplier_id: offer.supplier_id.clone(),
            supplier_name: offer.supplier_name.clone(),
        }
    }
}

/// Aggregate figures for one category, computed over each product's cheapest price.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAggregate {
    /// Category label
    pub category: String,
    /// Number of products in the category
    pub product_count: usize,
    /// Mean of the products' cheapest prices
    pub average_price: f64,
    /// Lowest cheapest price in the category
    pub min_price: f64,
    /// The product holding `min_price`
    pub cheapest: CheapestPrice,
}

/// Category selection for [`filter_products`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }
}

/// Free-text and category filter over the product list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against product names. Empty matches all.
    pub search: String,
    pub category: CategoryFilter,
}

/// Supplier price spread for a single product.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceStats {
    pub min_price: f64,
    pub max_price: f64,
    pub average_price: f64,
    /// Suppliers quoting exactly `min_price`, in insertion order
    pub lowest_supplier_ids: Vec<String>,
}

/// Headline figures for the administrator dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogSummary {
    pub total_products: usize,
    pub total_suppliers: usize,
    pub total_categories: usize,
    /// Product with the lowest cheapest price
    pub cheapest: CheapestPrice,
    /// Product with the highest cheapest price
    pub most_expensive: CheapestPrice,
    /// Mean of all products' cheapest prices
    pub average_price: f64,
}

/// Lists every product carried by `supplier_id`, with that supplier's price,
/// in catalog order. An unknown supplier yields an empty list.
#[must_use]
pub fn products_for_supplier<'a>(
    catalog: &'a Catalog,
    supplier_id: &str,
) -> Vec<SupplierProduct<'a>> {
    let listing: Vec<SupplierProduct<'a>> = catalog
        .products()
        .iter()
        .filter_map(|product| {
            product.offer(supplier_id).map(|offer| SupplierProduct {
                product,
                price: offer.price,
            })
        })
        .collect();
    debug!(supplier_id, count = listing.len(), "Listed supplier products");
    listing
}

/// Selects the cheapest supplier for every product, in catalog order.
///
/// Ties resolve to the supplier listed first on the product.
#[must_use]
pub fn cheapest_per_product(catalog: &Catalog) -> Vec<CheapestPrice> {
    catalog
        .products()
        .iter()
        .filter_map(|product| {
            product
                .cheapest_offer()
                .map(|offer| CheapestPrice::new(product, offer))
        })
        .collect()
}

/// Distinct category labels in first-seen order.
#[must_use]
pub fn categories(catalog: &Catalog) -> Vec<&str> {
    let mut seen = HashSet::new();
    catalog
        .products()
        .iter()
        .map(|p| p.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}

/// Computes count, mean cheapest price and minimum cheapest price for a category.
///
/// # Errors
/// Returns `Error::NoData` if no product belongs to `category`.
pub fn category_aggregates(catalog: &Catalog, category: &str) -> Result<CategoryAggregate> {
    let in_category: Vec<CheapestPrice> = cheapest_per_product(catalog)
        .into_iter()
        .filter(|c| c.category == category)
        .collect();

    let no_data = || Error::NoData {
        context: format!("category '{category}'"),
    };
    let average_price = mean(in_category.iter().map(|c| c.cheapest_price)).ok_or_else(no_data)?;
    let cheapest = lowest(&in_category).cloned().ok_or_else(no_data)?;

    Ok(CategoryAggregate {
        category: category.to_string(),
        product_count: in_category.len(),
        average_price,
        min_price: cheapest.cheapest_price,
        cheapest,
    })
}

/// Aggregates for every category, in first-seen order.
#[must_use]
pub fn all_category_aggregates(catalog: &Catalog) -> Vec<CategoryAggregate> {
    categories(catalog)
        .into_iter()
        .filter_map(|category| category_aggregates(catalog, category).ok())
        .collect()
}

/// Filters products by name search and category, preserving catalog order.
#[must_use]
pub fn filter_products<'a>(catalog: &'a Catalog, filter: &ProductFilter) -> Vec<&'a Product> {
    let needle = filter.search.trim().to_lowercase();
    catalog
        .products()
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| filter.category.matches(&p.category))
        .collect()
}

/// Min, max and mean supplier price for one product.
///
/// # Errors
/// Returns `Error::NoData` if the product has no supplier offers.
pub fn price_stats(product: &Product) -> Result<PriceStats> {
    let no_data = || Error::NoData {
        context: format!("product '{}'", product.id),
    };
    let prices = || product.suppliers.iter().map(|s| s.price);

    let average_price = mean(prices()).ok_or_else(no_data)?;
    let min_price = prices().fold(f64::INFINITY, f64::min);
    let max_price = prices().fold(f64::NEG_INFINITY, f64::max);
    let lowest_supplier_ids = product
        .suppliers
        .iter()
        .filter(|s| s.price <= min_price)
        .map(|s| s.supplier_id.clone())
        .collect();

    Ok(PriceStats {
        min_price,
        max_price,
        average_price,
        lowest_supplier_ids,
    })
}

/// Builds the administrator dashboard summary.
///
/// # Errors
/// Returns `Error::NoData` if the catalog has no products.
pub fn catalog_summary(catalog: &Catalog) -> Result<CatalogSummary> {
    let cheapest_prices = cheapest_per_product(catalog);
    let no_data = || Error::NoData {
        context: "catalog".to_string(),
    };

    let average_price =
        mean(cheapest_prices.iter().map(|c| c.cheapest_price)).ok_or_else(no_data)?;
    let cheapest = lowest(&cheapest_prices).cloned().ok_or_else(no_data)?;
    let most_expensive = highest(&cheapest_prices).cloned().ok_or_else(no_data)?;

    Ok(CatalogSummary {
        total_products: catalog.products().len(),
        total_suppliers: catalog.suppliers().len(),
        total_categories: categories(catalog).len(),
        cheapest,
        most_expensive,
        average_price,
    })
}

/// Mean price across everything a supplier offers.
///
/// # Errors
/// Returns `Error::NoData` if the supplier offers nothing.
pub fn supplier_average_price(catalog: &Catalog, supplier_id: &str) -> Result<f64> {
    mean(
        products_for_supplier(catalog, supplier_id)
            .iter()
            .map(|p| p.price),
    )
    .ok_or_else(|| Error::NoData {
        context: format!("supplier '{supplier_id}'"),
    })
}

/// Arithmetic mean, or `None` for an empty sequence.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_u32), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}

fn lowest(prices: &[CheapestPrice]) -> Option<&CheapestPrice> {
    prices.iter().fold(None, |best, current| match best {
        Some(b) if b.cheapest_price <= current.cheapest_price => Some(b),
        _ => Some(current),
    })
}

fn highest(prices: &[CheapestPrice]) -> Option<&CheapestPrice> {
    prices.iter().fold(None, |best, current| match best {
        Some(b) if b.cheapest_price >= current.cheapest_price => Some(b),
        _ => Some(current),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_cheapest_picanha_is_supplier_b() {
        let catalog = sample_catalog();
        let cheapest = cheapest_per_product(&catalog);
        let picanha = cheapest.iter().find(|c| c.product_id == "picanha").unwrap();
        assert_eq!(picanha.cheapest_price, 75.0);
        assert_eq!(picanha.supplier_name, "Fornecedor B");
        assert_eq!(picanha.supplier_id, "B");
    }

    #[test]
    fn test_cheapest_per_product_keeps_catalog_order() {
        let catalog = sample_catalog();
        let ids: Vec<String> = cheapest_per_product(&catalog)
            .into_iter()
            .map(|c| c.product_id)
            .collect();
        assert_eq!(ids, vec!["picanha", "linguica", "maminha"]);
    }

    #[test]
    fn test_cheapest_never_exceeds_any_offer() {
        let catalog = sample_catalog();
        for cheapest in cheapest_per_product(&catalog) {
            let product = catalog.product(&cheapest.product_id).unwrap();
            assert!(
                product
                    .suppliers
                    .iter()
                    .all(|s| cheapest.cheapest_price <= s.price)
            );
        }
    }

    #[test]
    fn test_cheapest_tie_prefers_first_listed() {
        let catalog = catalog_with(vec![product(
            "costela",
            "Costela Bovina",
            "Carnes Especiais",
            &[("C", 26.0), ("B", 26.0), ("E", 30.0)],
        )]);
        let cheapest = cheapest_per_product(&catalog);
        assert_eq!(cheapest[0].supplier_id, "C");
    }

    #[test]
    fn test_products_for_supplier() {
        let catalog = sample_catalog();

        let listing = products_for_supplier(&catalog, "B");
        let ids: Vec<&str> = listing.iter().map(|p| p.product.id.as_str()).collect();
        assert_eq!(ids, vec!["picanha", "maminha"]);
        assert_eq!(listing[0].price, 75.0);
        assert_eq!(listing[1].price, 60.0);

        for item in &listing {
            assert_eq!(item.product.offer("B").unwrap().price, item.price);
        }
    }

    #[test]
    fn test_products_for_unknown_supplier_is_empty() {
        let catalog = sample_catalog();
        assert!(products_for_supplier(&catalog, "Z").is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(categories(&catalog), vec!["Carnes Nobres", "Embutidos"]);
    }

    #[test]
    fn test_category_aggregates() -> Result<()> {
        let catalog = sample_catalog();

        let nobres = category_aggregates(&catalog, "Carnes Nobres")?;
        assert_eq!(nobres.product_count, 2);
        // picanha 75, maminha 59
        assert_eq!(nobres.average_price, 67.0);
        assert_eq!(nobres.min_price, 59.0);
        assert_eq!(nobres.cheapest.product_id, "maminha");

        let embutidos = category_aggregates(&catalog, "Embutidos")?;
        assert_eq!(embutidos.product_count, 1);
        assert_eq!(embutidos.average_price, 22.0);
        Ok(())
    }

    #[test]
    fn test_category_aggregates_no_data() {
        let catalog = sample_catalog();
        let err = category_aggregates(&catalog, "Aves").unwrap_err();
        assert!(matches!(err, Error::NoData { .. }));
    }

    #[test]
    fn test_all_category_aggregates() {
        let catalog = sample_catalog();
        let aggregates = all_category_aggregates(&catalog);
        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].category, "Carnes Nobres");
        assert_eq!(aggregates[1].category, "Embutidos");
    }

    #[test]
    fn test_filter_products() {
        let catalog = sample_catalog();

        let all = filter_products(&catalog, &ProductFilter::default());
        assert_eq!(all.len(), 3);

        let by_search = filter_products(
            &catalog,
            &ProductFilter {
                search: "  MAMI ".to_string(),
                category: CategoryFilter::All,
            },
        );
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].id, "maminha");

        let by_category = filter_products(
            &catalog,
            &ProductFilter {
                search: String::new(),
                category: CategoryFilter::Named("Carnes Nobres".to_string()),
            },
        );
        let ids: Vec<&str> = by_category.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["picanha", "maminha"]);

        let none = filter_products(
            &catalog,
            &ProductFilter {
                search: "picanha".to_string(),
                category: CategoryFilter::Named("Embutidos".to_string()),
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_price_stats() -> Result<()> {
        let catalog = sample_catalog();
        let stats = price_stats(catalog.require_product("picanha")?)?;
        assert_eq!(stats.min_price, 75.0);
        assert_eq!(stats.max_price, 82.0);
        assert_eq!(stats.average_price, 79.0);
        assert_eq!(stats.lowest_supplier_ids, vec!["B".to_string()]);
        Ok(())
    }

    #[test]
    fn test_price_stats_without_suppliers() {
        let mut lonely = product("tofu", "Tofu", "Outros", &[("A", 1.0)]);
        lonely.suppliers.clear();
        assert!(matches!(
            price_stats(&lonely).unwrap_err(),
            Error::NoData { .. }
        ));
    }

    #[test]
    fn test_catalog_summary() -> Result<()> {
        let catalog = sample_catalog();
        let summary = catalog_summary(&catalog)?;
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.total_suppliers, 5);
        assert_eq!(summary.total_categories, 2);
        assert_eq!(summary.cheapest.product_id, "linguica");
        assert_eq!(summary.most_expensive.product_id, "picanha");
        // (75 + 22 + 59) / 3
        assert_eq!(summary.average_price, 52.0);
        Ok(())
    }

    #[test]
    fn test_catalog_summary_empty() {
        let catalog = catalog_with(Vec::new());
        assert!(matches!(
            catalog_summary(&catalog).unwrap_err(),
            Error::NoData { .. }
        ));
    }

    #[test]
    fn test_supplier_average_price() -> Result<()> {
        let catalog = sample_catalog();
        // picanha 80, linguica 25
        assert_eq!(supplier_average_price(&catalog, "A")?, 52.5);
        assert!(matches!(
            supplier_average_price(&catalog, "Z").unwrap_err(),
            Error::NoData { .. }
        ));
        Ok(())
    }
}
