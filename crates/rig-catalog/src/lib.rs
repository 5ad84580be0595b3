//! Part catalog access for BinaRig.
//!
//! A `CatalogBackend` reads categories and parts from storage (SQLite on
//! wasm32); the `CatalogProvider` wraps a backend and degrades to the
//! built-in sample catalog whenever the backend errors or is empty, so
//! catalog reads never fail outright.
//!
//! # Example
//!
//! ```rust,ignore
//! use rig_catalog::{CatalogProvider, SampleBackend};
//!
//! let provider = CatalogProvider::new(SampleBackend);
//! let parts = provider.parts(Some(CategoryKey::Gpu));
//! ```

mod backend;
mod error;
mod provider;
mod sample;

pub use backend::CatalogBackend;
#[cfg(target_arch = "wasm32")]
pub use backend::SqliteBackend;
pub use error::CatalogError;
pub use provider::{CatalogProvider, CatalogSource, Sourced};
pub use sample::{sample_categories, sample_parts, SampleBackend};
