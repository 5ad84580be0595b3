//! Catalog part records.

use crate::category::CategoryKey;
use crate::ids::PartId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A purchasable catalog item belonging to exactly one category.
///
/// Immutable once loaded from the catalog provider; selections reference
/// parts, they never own or edit them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Unique part identifier.
    pub id: PartId,
    /// Part name (e.g. "Ryzen 5 7600").
    pub name: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Price in MYR.
    pub price: Price,
    /// Estimated power draw in watts.
    pub watt: u32,
    /// Optional free-form details line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// The category this part fills.
    pub category_key: CategoryKey,
}

impl Part {
    /// Create a part record.
    pub fn new(
        id: impl Into<PartId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Price,
        watt: u32,
        details: Option<&str>,
        category_key: CategoryKey,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            price,
            watt,
            details: details.map(str::to_string),
            category_key,
        }
    }
}
