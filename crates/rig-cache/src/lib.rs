//! Type-safe key-value persistence for BinaRig.
//!
//! Provides a small JSON-serializing wrapper over a key-value store plus
//! the single durable slot the configurator persists its selection into.
//! On wasm32 the store is Spin's Key-Value Store; everywhere else it is an
//! in-memory map so the persistence path can be exercised in host tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use rig_cache::{BuildSlot, KvStore};
//!
//! let slot = BuildSlot::open()?;
//! slot.save(&store.to_saved());          // after every mutation
//! let saved = slot.load();               // best effort on startup
//! ```

mod error;
mod kv;
mod slot;

pub use error::CacheError;
pub use kv::KvStore;
pub use slot::{BuildSlot, BUILD_SLOT_KEY};
