//! Command-line interface - argument definitions and dispatch.
//!
//! Each invocation loads the catalog, opens a session for the role the command
//! needs, runs one command and returns its rendered output. Nothing is kept
//! between invocations.

/// Command implementations (admin views, quotation, supplier)
pub mod commands;
/// Table rendering shared by the commands
pub mod render;

use crate::{
    core::{Catalog, RoleKind, SessionState},
    errors::{Error, Result},
};
use clap::{Args, Parser, Subcommand};
use std::{path::PathBuf, str::FromStr};
use tracing::instrument;

#[derive(Parser, Debug)]
#[command(
    name = "bbq-quotes",
    version,
    about = "Compare supplier prices and build quotations for a barbecue restaurant"
)]
pub struct Cli {
    /// Catalog seed file (overrides CATALOG_PATH).
    #[arg(long, value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dashboard: totals, price extremes and per-category figures.
    Summary,
    /// List product categories.
    Categories,
    /// List products with their price spread.
    Products {
        /// Case-insensitive text matched against product names.
        #[arg(short, long)]
        search: Option<String>,
        /// Only show this category.
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show every supplier offer for one product.
    Product {
        product_id: String,
    },
    /// Cheapest supplier for every product.
    Compare,
    /// Price history for a product.
    History {
        product_id: String,
    },
    /// Products and prices offered by a supplier.
    Supplier {
        supplier_id: String,
    },
    /// Change a supplier's price for one of its products. Not persisted.
    SetPrice {
        /// Supplier making the change.
        #[arg(long)]
        supplier: String,
        product_id: String,
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },
    /// Build a quotation.
    Quote(QuoteArgs),
}

#[derive(Args, Debug, Default)]
pub struct QuoteArgs {
    /// Start from the cheapest supplier for every product.
    #[arg(long)]
    pub best: bool,

    /// Add a line item. Repeatable.
    #[arg(long = "item", value_name = "PRODUCT:SUPPLIER[:QTY]")]
    pub items: Vec<ItemSpec>,

    /// Remove the line item at this 1-based position. Repeatable; applied in order after adding.
    #[arg(long = "remove", value_name = "POSITION")]
    pub remove: Vec<usize>,
}

/// A `PRODUCT:SUPPLIER[:QTY]` line item request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    pub product_id: String,
    pub supplier_id: String,
    pub quantity: Option<i64>,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let (product_id, supplier_id, quantity) = match parts.as_slice() {
            [product, supplier] => (*product, *supplier, None),
            [product, supplier, qty] => {
                let quantity = qty
                    .parse::<i64>()
                    .map_err(|e| format!("invalid quantity '{qty}': {e}"))?;
                (*product, *supplier, Some(quantity))
            }
            _ => return Err(format!("expected PRODUCT:SUPPLIER[:QTY], got '{s}'")),
        };
        if product_id.is_empty() || supplier_id.is_empty() {
            return Err(format!("expected PRODUCT:SUPPLIER[:QTY], got '{s}'"));
        }
        Ok(Self {
            product_id: product_id.to_string(),
            supplier_id: supplier_id.to_string(),
            quantity,
        })
    }
}

/// Runs one command against `catalog` and returns the text to print.
///
/// # Errors
/// Returns any domain error raised by the command.
#[instrument(skip(catalog))]
pub fn run(command: &Command, mut catalog: Catalog) -> Result<String> {
    let mut session = SessionState::new();

    let output = match command {
        Command::Supplier { supplier_id } => {
            session.login(&catalog, RoleKind::Supplier, Some(supplier_id.as_str()))?;
            commands::supplier::show_supplier(&catalog, &session)
        }
        Command::SetPrice {
            supplier,
            product_id,
            price,
        } => {
            session.login(&catalog, RoleKind::Supplier, Some(supplier.as_str()))?;
            commands::supplier::set_price(&mut catalog, &session, product_id, *price)
        }
        admin_command => {
            session.login(&catalog, RoleKind::Administrator, None)?;
            run_admin(admin_command, &catalog, &session)
        }
    };

    session.logout();
    output
}

fn run_admin(command: &Command, catalog: &Catalog, session: &SessionState) -> Result<String> {
    use commands::{admin, quotation};

    match command {
        Command::Summary => admin::summary(catalog, session),
        Command::Categories => admin::categories(catalog, session),
        Command::Products { search, category } => {
            admin::products(catalog, session, search.as_deref(), category.as_deref())
        }
        Command::Product { product_id } => admin::product(catalog, session, product_id),
        Command::Compare => admin::compare(catalog, session),
        Command::History { product_id } => admin::history(catalog, session, product_id),
        Command::Quote(args) => quotation::quote(catalog, session, args),
        Command::Supplier { .. } | Command::SetPrice { .. } => Err(Error::PermissionDenied {
            message: "supplier commands need a supplier login".to_string(),
        }),
    }
}
