//! Build-summary export for BinaRig.
//!
//! Turns a selection into a locale-aware JSON payload: one row per
//! category plus a totals row, each selected part carrying a buy-search
//! link for the active locale's search target.

mod document;
mod links;

pub use document::{ExportDocument, ExportPart, ExportRow};
pub use links::SearchTarget;
