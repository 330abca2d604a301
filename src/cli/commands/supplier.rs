//! Supplier commands: the logged-in supplier's catalog and price edits.

use crate::{
    cli::render::{align_right, new_table},
    core::{Catalog, SessionState, pricing, report::format_price},
    errors::Result,
};

/// Lists the logged-in supplier's products and average price.
pub fn show_supplier(catalog: &Catalog, session: &SessionState) -> Result<String> {
    let supplier_id = session.require_supplier()?;
    let supplier = catalog.require_supplier(supplier_id)?;
    let listing = pricing::products_for_supplier(catalog, supplier_id);

    if listing.is_empty() {
        return Ok(format!("{} has no products in the catalog.", supplier.name));
    }

    let mut table = new_table(&["Id", "Product", "Category", "Price"]);
    for entry in &listing {
        table.add_row(vec![
            entry.product.id.clone(),
            entry.product.name.clone(),
            entry.product.category.clone(),
            format_price(entry.price),
        ]);
    }
    align_right(&mut table, &[3]);

    let average = pricing::supplier_average_price(catalog, supplier_id)?;
    Ok(format!(
        "{} - {} products, average {}\n{table}",
        supplier.name,
        listing.len(),
        format_price(average)
    ))
}

/// Updates the logged-in supplier's price for a product and shows the result.
pub fn set_price(
    catalog: &mut Catalog,
    session: &SessionState,
    product_id: &str,
    price: f64,
) -> Result<String> {
    let offer = catalog.update_supplier_price(session, product_id, price)?;
    let message = format!(
        "{} now quotes {} at {}",
        offer.supplier_name,
        product_id,
        format_price(offer.price)
    );
    Ok(format!("{message}\n{}", show_supplier(catalog, session)?))
}
