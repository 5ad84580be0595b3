//! Derived totals over a selection.

use crate::price::Price;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

/// Derived price and power totals. Never stored; recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuildTotals {
    /// Sum of prices over every selected part.
    pub total_price: Price,
    /// Sum of estimated wattage over every selected part.
    pub total_watt: u32,
}

/// Compute totals over every part referenced anywhere in the selection.
///
/// Pure and order-independent; categories carry no weighting.
pub fn aggregate(selection: &Selection) -> BuildTotals {
    selection.iter_parts().fold(BuildTotals::default(), |acc, part| {
        BuildTotals {
            total_price: acc.total_price.saturating_add(part.price),
            total_watt: acc.total_watt.saturating_add(part.watt),
        }
    })
}
