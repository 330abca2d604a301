//! Catalog configuration loading from config.toml
//!
//! The catalog seed lists suppliers, products with their supplier offers, and
//! optional per-product price history. It is parsed with `toml` and then
//! validated by [`Catalog::new`], so a malformed seed never produces a catalog.

use crate::{
    core::catalog::Catalog,
    entities::{PriceHistoryEntry, Product, Supplier},
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use tracing::{debug, info};

/// Configuration structure representing the entire seed file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Registered suppliers
    pub suppliers: Vec<Supplier>,
    /// Products and their supplier offers, in display order
    pub products: Vec<Product>,
    /// Price history keyed by product id
    #[serde(default)]
    pub price_history: HashMap<String, Vec<PriceHistoryEntry>>,
}

impl TryFrom<CatalogConfig> for Catalog {
    type Error = Error;

    fn try_from(config: CatalogConfig) -> Result<Self> {
        Self::new(config.suppliers, config.products, config.price_history)
    }
}

/// Parses a seed document from a TOML string.
///
/// # Errors
/// Returns `Error::Config` if the TOML is invalid or required fields are missing.
pub fn parse_catalog_config(contents: &str) -> Result<CatalogConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog TOML: {e}"),
    })
}

/// Loads and validates the catalog from a TOML seed file
///
/// # Arguments
/// * `path` - Path to the seed file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or required fields are missing
/// - The catalog fails integrity checks (duplicate ids, unknown suppliers, bad prices)
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path_ref = path.as_ref();
    debug!("Attempting to load catalog from: {:?}", path_ref);

    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path_ref.display()),
    })?;

    let catalog = Catalog::try_from(parse_catalog_config(&contents)?)?;
    info!(
        products = catalog.products().len(),
        suppliers = catalog.suppliers().len(),
        "Loaded catalog from {:?}",
        path_ref
    );
    Ok(catalog)
}

/// Loads the catalog from `CATALOG_PATH`, or `./config.toml` when unset.
///
/// # Errors
/// See [`load_catalog`].
pub fn load_default_catalog() -> Result<Catalog> {
    load_catalog(super::settings::get_catalog_path())
}
