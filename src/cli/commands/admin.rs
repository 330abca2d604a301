//! Administrator commands: dashboard, catalog browsing, price comparison and history.

use crate::{
    cli::render::{align_right, new_table},
    core::{
        Catalog, SessionState,
        history::{overall_variation, price_variations},
        pricing::{self, CategoryFilter, ProductFilter},
        report::{format_change, format_price, format_price_bar, format_variation, trend_label},
    },
    errors::Result,
};
use std::fmt::Write;

/// Dashboard summary with per-category figures.
pub fn summary(catalog: &Catalog, session: &SessionState) -> Result<String> {
    session.require_admin()?;
    let summary = pricing::catalog_summary(catalog)?;

    let mut out = String::new();
    let _ = writeln!(out, "Products:   {}", summary.total_products);
    let _ = writeln!(out, "Suppliers:  {}", summary.total_suppliers);
    let _ = writeln!(out, "Categories: {}", summary.total_categories);
    let _ = writeln!(
        out,
        "Lowest price:  {} - {} ({})",
        format_price(summary.cheapest.cheapest_price),
        summary.cheapest.product_name,
        summary.cheapest.supplier_name
    );
    let _ = writeln!(
        out,
        "Highest price: {} - {} ({})",
        format_price(summary.most_expensive.cheapest_price),
        summary.most_expensive.product_name,
        summary.most_expensive.supplier_name
    );
    let _ = writeln!(out, "Average price: {}", format_price(summary.average_price));

    let mut table = new_table(&["Category", "Products", "Average", "Lowest", "Lowest product"]);
    for aggregate in pricing::all_category_aggregates(catalog) {
        table.add_row(vec![
            aggregate.category.clone(),
            aggregate.product_count.to_string(),
            format_price(aggregate.average_price),
            format_price(aggregate.min_price),
            aggregate.cheapest.product_name.clone(),
        ]);
    }
    align_right(&mut table, &[1, 2, 3]);
    let _ = write!(out, "\n{table}");
    Ok(out)
}

/// Distinct categories in catalog order.
pub fn categories(catalog: &Catalog, session: &SessionState) -> Result<String> {
    session.require_admin()?;
    Ok(pricing::categories(catalog).join("\n"))
}

/// Product list with min/avg/max supplier prices, optionally filtered.
pub fn products(
    catalog: &Catalog,
    session: &SessionState,
    search: Option<&str>,
    category: Option<&str>,
) -> Result<String> {
    session.require_admin()?;
    let filter = ProductFilter {
        search: search.unwrap_or_default().to_string(),
        category: category.map_or(CategoryFilter::All, |c| CategoryFilter::Named(c.to_string())),
    };
    let products = pricing::filter_products(catalog, &filter);
    if products.is_empty() {
        return Ok("No products match the filter.".to_string());
    }

    let mut table = new_table(&["Id", "Product", "Category", "Suppliers", "Min", "Average", "Max"]);
    for product in &products {
        let stats = pricing::price_stats(product)?;
        table.add_row(vec![
            product.id.clone(),
            product.name.clone(),
            product.category.clone(),
            product.suppliers.len().to_string(),
            format_price(stats.min_price),
            format_price(stats.average_price),
            format_price(stats.max_price),
        ]);
    }
    align_right(&mut table, &[3, 4, 5, 6]);
    Ok(format!("Products ({})\n{table}", products.len()))
}

/// Every supplier offer for one product, with the lowest offers marked.
pub fn product(catalog: &Catalog, session: &SessionState, product_id: &str) -> Result<String> {
    session.require_admin()?;
    let product = catalog.require_product(product_id)?;
    let stats = pricing::price_stats(product)?;

    let mut table = new_table(&["Supplier", "Price", ""]);
    for offer in &product.suppliers {
        let marker = if stats.lowest_supplier_ids.contains(&offer.supplier_id) {
            "lowest"
        } else {
            ""
        };
        table.add_row(vec![
            offer.supplier_name.clone(),
            format_price(offer.price),
            marker.to_string(),
        ]);
    }
    align_right(&mut table, &[1]);

    Ok(format!(
        "{} ({})\n{table}\nMin {} | Average {} | Max {}",
        product.name,
        product.category,
        format_price(stats.min_price),
        format_price(stats.average_price),
        format_price(stats.max_price)
    ))
}

/// Cheapest supplier per product.
pub fn compare(catalog: &Catalog, session: &SessionState) -> Result<String> {
    session.require_admin()?;
    let mut table = new_table(&["Product", "Category", "Best supplier", "Price"]);
    for cheapest in pricing::cheapest_per_product(catalog) {
        table.add_row(vec![
            cheapest.product_name,
            cheapest.category,
            cheapest.supplier_name,
            format_price(cheapest.cheapest_price),
        ]);
    }
    align_right(&mut table, &[3]);
    Ok(table.to_string())
}

/// Price history with period-over-period variation and a bar chart.
pub fn history(catalog: &Catalog, session: &SessionState, product_id: &str) -> Result<String> {
    session.require_admin()?;
    let product = catalog.require_product(product_id)?;
    let entries = catalog.price_history(product_id)?;
    if entries.is_empty() {
        return Ok(format!("No price history recorded for {}.", product.name));
    }

    let max_price = entries.iter().map(|e| e.price).fold(0.0, f64::max);
    let mut table = new_table(&["Date", "Price", "Change", ""]);
    for row in price_variations(entries) {
        let change = row
            .variation
            .as_ref()
            .map(format_variation)
            .unwrap_or_default();
        table.add_row(vec![
            row.entry.date.clone(),
            format_price(row.entry.price),
            change,
            format_price_bar(row.entry.price, max_price, None),
        ]);
    }
    align_right(&mut table, &[1, 2]);

    let mut out = format!("Price history - {}\n{table}", product.name);
    if let Some(overall) = overall_variation(entries) {
        let _ = write!(
            out,
            "\nOverall: {} ({}, {})",
            format_change(overall.change),
            format_variation(&overall),
            trend_label(overall.trend)
        );
    }
    Ok(out)
}
