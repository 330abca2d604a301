//! Price history analysis.
//!
//! Turns a product's chronologically ordered price observations into
//! period-over-period variations for the history view.

use crate::entities::PriceHistoryEntry;

/// Direction of a price change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Down,
    Up,
    Flat,
}

impl Trend {
    fn from_change(change: f64) -> Self {
        if change < 0.0 {
            Self::Down
        } else if change > 0.0 {
            Self::Up
        } else {
            Self::Flat
        }
    }

    /// Arrow glyph used in reports.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Down => "↓",
            Self::Up => "↑",
            Self::Flat => "=",
        }
    }
}

/// Change of one entry relative to the entry before it.
#[derive(Clone, Debug, PartialEq)]
pub struct Variation {
    /// Absolute change in price
    pub change: f64,
    /// Change as a percentage of the previous price; 0 when the previous price is 0
    pub change_percent: f64,
    pub trend: Trend,
}

/// A history entry annotated with its variation. The first entry has none.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceVariation<'a> {
    pub entry: &'a PriceHistoryEntry,
    pub variation: Option<Variation>,
}

/// Annotates each history entry with its change from the previous entry.
#[must_use]
pub fn price_variations(entries: &[PriceHistoryEntry]) -> Vec<PriceVariation<'_>> {
    let first = entries.first().map(|entry| PriceVariation {
        entry,
        variation: None,
    });
    let rest = entries.windows(2).map(|pair| PriceVariation {
        entry: &pair[1],
        variation: Some(variation_between(pair[0].price, pair[1].price)),
    });
    first.into_iter().chain(rest).collect()
}

/// Overall change from the first to the last entry, if there are at least two.
#[must_use]
pub fn overall_variation(entries: &[PriceHistoryEntry]) -> Option<Variation> {
    match entries {
        [first, .., last] => Some(variation_between(first.price, last.price)),
        _ => None,
    }
}

fn variation_between(previous: f64, current: f64) -> Variation {
    let change = current - previous;
    let change_percent = if previous == 0.0 {
        0.0
    } else {
        change / previous * 100.0
    };
    Variation {
        change,
        change_percent,
        trend: Trend::from_change(change),
    }
}
