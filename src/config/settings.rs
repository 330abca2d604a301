//! Settings module for values read from the environment.
//!
//! The catalog seed location comes from `CATALOG_PATH`, which may be set in the
//! shell or in a `.env` file loaded at startup. Without it the seed is read from
//! `config.toml` in the working directory.

use std::path::PathBuf;

/// Environment variable naming the catalog seed file.
pub const CATALOG_PATH_VAR: &str = "CATALOG_PATH";

/// Seed file used when `CATALOG_PATH` is not set.
pub const DEFAULT_CATALOG_PATH: &str = "config.toml";

/// Gets the catalog seed path from the environment or returns the default path.
#[must_use]
pub fn get_catalog_path() -> PathBuf {
    resolve_catalog_path(std::env::var(CATALOG_PATH_VAR).ok())
}

/// Picks the seed path from an optional override, ignoring blank values.
#[must_use]
pub fn resolve_catalog_path(configured: Option<String>) -> PathBuf {
    configured
        .filter(|p| !p.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from)
}
