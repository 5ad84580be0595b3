//! Domain types and selection logic for the BinaRig configurator.
//!
//! This crate models the build a user assembles:
//!
//! - **Catalog shapes**: `CategoryKey`, `Category`, `Part`, `Price`
//! - **Selection**: the per-category part mapping and its state machine
//! - **Aggregation**: derived price/wattage totals over a selection
//!
//! The selection state machine is the one piece with real rules: one part
//! per single-select category, no duplicate part IDs in multi-select
//! categories, and a persisted form that stores part IDs only.

pub mod aggregate;
pub mod category;
pub mod error;
pub mod ids;
pub mod part;
pub mod price;
pub mod selection;

pub use aggregate::{aggregate, BuildTotals};
pub use category::{Category, CategoryKey};
pub use error::UnknownCategoryKey;
pub use ids::PartId;
pub use part::Part;
pub use price::Price;
pub use selection::{SavedSelection, Selection, SelectionStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{aggregate, BuildTotals};
    pub use crate::category::{Category, CategoryKey};
    pub use crate::error::UnknownCategoryKey;
    pub use crate::ids::PartId;
    pub use crate::part::Part;
    pub use crate::price::Price;
    pub use crate::selection::{SavedSelection, Selection, SelectionStore};
}
