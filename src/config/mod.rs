/// Catalog seed loading from config.toml
pub mod catalog;

/// Environment-driven settings (seed file location)
pub mod settings;
