//! Report formatting helpers.
//!
//! Framework-agnostic text formatting for prices, trends and quotation lines,
//! used by the command-line front end.

use crate::core::{
    history::{Trend, Variation},
    quotation::QuotationLineItem,
};

/// Formats a price in Brazilian reais, e.g. `R$ 75.00`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("R$ {price:.2}")
}

/// Formats a variation as an arrow and an absolute percentage, e.g. `↓ 3.5%`.
#[must_use]
pub fn format_variation(variation: &Variation) -> String {
    format!(
        "{} {:.1}%",
        variation.trend.symbol(),
        variation.change_percent.abs()
    )
}

/// Formats a signed price change, e.g. `-R$ 3.00` or `+R$ 2.50`.
#[must_use]
pub fn format_change(change: f64) -> String {
    if change < 0.0 {
        format!("-{}", format_price(change.abs()))
    } else {
        format!("+{}", format_price(change))
    }
}

/// One-line summary of a quotation line item.
#[must_use]
pub fn format_line_item(item: &QuotationLineItem) -> String {
    format!(
        "{} ({}) | {} x {} = {}",
        item.product_name,
        item.selected_supplier_name,
        item.quantity,
        format_price(item.unit_price),
        format_price(item.total_price)
    )
}

/// Renders a horizontal bar scaled against `max_price`, e.g. `████████░░`.
///
/// Used to chart price history in the terminal.
#[must_use]
pub fn format_price_bar(price: f64, max_price: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(20);
    let ratio = if max_price > 0.0 {
        (price / max_price).clamp(0.0, 1.0)
    } else {
        0.0
    };

    // ratio ∈ [0, 1] and length is small, so the rounded value fits in usize.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = (ratio * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Human-readable trend word for summaries.
#[must_use]
pub const fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Down => "falling",
        Trend::Up => "rising",
        Trend::Flat => "stable",
    }
}
