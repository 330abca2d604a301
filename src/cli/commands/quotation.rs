//! Quotation command: builds a quotation from `--best`, `--item` and `--remove`.

use crate::{
    cli::{
        QuoteArgs,
        render::{align_right, new_table},
    },
    core::{Catalog, Quotation, SessionState, report::format_price},
    errors::{Error, Result},
};
use tracing::info;

/// Builds a quotation and renders it as a table with the grand total.
///
/// `--best` is applied first, then each `--item` is added (and its quantity
/// set), then `--remove` positions are removed in the order given.
pub fn quote(catalog: &Catalog, session: &SessionState, args: &QuoteArgs) -> Result<String> {
    session.require_admin()?;
    let quotation = build_quotation(catalog, args)?;
    info!(
        items = quotation.len(),
        total = quotation.total(),
        "Quotation built"
    );
    Ok(render_quotation(&quotation))
}

fn build_quotation(catalog: &Catalog, args: &QuoteArgs) -> Result<Quotation> {
    let mut quotation = Quotation::new();
    if args.best {
        quotation.generate_best(catalog);
    }

    for spec in &args.items {
        quotation.add(catalog, &spec.product_id, &spec.supplier_id)?;
        if let Some(quantity) = spec.quantity {
            quotation.set_quantity(quotation.len() - 1, quantity)?;
        }
    }

    for position in &args.remove {
        let index = position.checked_sub(1).ok_or_else(|| Error::InvalidArgument {
            message: "line item positions start at 1".to_string(),
        })?;
        quotation.remove(index)?;
    }

    Ok(quotation)
}

fn render_quotation(quotation: &Quotation) -> String {
    if quotation.is_empty() {
        return "Quotation is empty.".to_string();
    }

    let mut table = new_table(&["#", "Product", "Category", "Supplier", "Qty", "Unit", "Total"]);
    for (position, item) in quotation.items().iter().enumerate() {
        table.add_row(vec![
            (position + 1).to_string(),
            item.product_name.clone(),
            item.category.clone(),
            item.selected_supplier_name.clone(),
            item.quantity.to_string(),
            format_price(item.unit_price),
            format_price(item.total_price),
        ]);
    }
    align_right(&mut table, &[0, 4, 5, 6]);
    format!("{table}\nTotal: {}", format_price(quotation.total()))
}
