//! The single durable slot the configurator persists its selection into.

use crate::{CacheError, KvStore};
use rig_commerce::SavedSelection;

/// Fixed key for the persisted build.
///
/// There is exactly one build per deployment; the `v1` suffix leaves room
/// for a payload shape change without misreading old data.
pub const BUILD_SLOT_KEY: &str = "binarig:build:v1";

/// Durable storage for the current build selection.
///
/// Reads are best effort: a missing key and a corrupt payload both load as
/// `None`, so a bad write can never wedge the configurator at startup.
/// Writes propagate errors so callers can log them.
pub struct BuildSlot {
    store: KvStore,
}

impl BuildSlot {
    /// Open the slot over the default key-value store.
    pub fn open() -> Result<Self, CacheError> {
        Ok(Self {
            store: KvStore::open_default()?,
        })
    }

    /// Wrap an already-open store. Used by tests and by callers that share
    /// one store handle across concerns.
    pub fn with_store(store: KvStore) -> Self {
        Self { store }
    }

    /// Load the persisted selection, if any.
    ///
    /// Missing key and unparseable payload both return `None`.
    pub fn load(&self) -> Option<SavedSelection> {
        self.store.get(BUILD_SLOT_KEY).ok().flatten()
    }

    /// Persist the selection, replacing whatever was stored before.
    pub fn save(&self, selection: &SavedSelection) -> Result<(), CacheError> {
        self.store.set(BUILD_SLOT_KEY, selection)
    }

    /// Delete the persisted selection. Clearing an empty slot is fine.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.store.delete(BUILD_SLOT_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_commerce::{CategoryKey, PartId};
    use std::collections::BTreeMap;

    fn saved_with_cpu() -> SavedSelection {
        let mut map = BTreeMap::new();
        map.insert(CategoryKey::Cpu, vec![PartId::from("cpu-7600")]);
        SavedSelection(map)
    }

    #[test]
    fn test_load_empty_slot() {
        let slot = BuildSlot::open().unwrap();
        assert!(slot.load().is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let slot = BuildSlot::open().unwrap();
        slot.save(&saved_with_cpu()).unwrap();

        let loaded = slot.load().unwrap();
        assert_eq!(
            loaded.0.get(&CategoryKey::Cpu),
            Some(&vec![PartId::from("cpu-7600")])
        );
    }

    #[test]
    fn test_save_replaces_previous() {
        let slot = BuildSlot::open().unwrap();
        slot.save(&saved_with_cpu()).unwrap();

        let mut map = BTreeMap::new();
        map.insert(CategoryKey::Gpu, vec![PartId::from("gpu-4060")]);
        slot.save(&SavedSelection(map)).unwrap();

        let loaded = slot.load().unwrap();
        assert!(loaded.0.get(&CategoryKey::Cpu).is_none());
        assert!(loaded.0.get(&CategoryKey::Gpu).is_some());
    }

    #[test]
    fn test_corrupt_payload_loads_as_none() {
        let store = KvStore::open_default().unwrap();
        store.set_raw(BUILD_SLOT_KEY, b"\x00not json at all").unwrap();

        let slot = BuildSlot::with_store(store);
        assert!(slot.load().is_none());
    }

    #[test]
    fn test_clear() {
        let slot = BuildSlot::open().unwrap();
        slot.save(&saved_with_cpu()).unwrap();
        slot.clear().unwrap();
        assert!(slot.load().is_none());

        // Clearing again is fine.
        slot.clear().unwrap();
    }
}
