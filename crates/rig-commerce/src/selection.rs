//! The selection state machine.
//!
//! A `Selection` maps every category to an ordered list of chosen parts.
//! Single-select categories hold at most one part; multi-select categories
//! (RAM, storage, GPU) hold any number but never the same part ID twice.
//! `SelectionStore` adds the transient open-picker cursor and the
//! conversion to/from the persisted ID-only form.

use crate::category::CategoryKey;
use crate::ids::PartId;
use crate::part::Part;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The user's current in-progress build.
///
/// Every category key is always present in the mapping, possibly with an
/// empty part list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Selection {
    slots: BTreeMap<CategoryKey, Vec<Part>>,
}

impl Selection {
    /// Create an empty selection with every category present.
    pub fn empty() -> Self {
        let slots = CategoryKey::ALL
            .iter()
            .map(|key| (*key, Vec::new()))
            .collect();
        Self { slots }
    }

    /// Parts currently chosen for a category.
    pub fn parts(&self, key: CategoryKey) -> &[Part] {
        self.slots.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every selected part across all categories.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.slots.values().flatten()
    }

    /// Total number of selected parts.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Check if nothing is selected anywhere.
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(Vec::is_empty)
    }

    fn slot_mut(&mut self, key: CategoryKey) -> &mut Vec<Part> {
        self.slots.entry(key).or_default()
    }
}

/// Persisted form of a selection: part IDs only, keyed by category.
///
/// Rehydration re-resolves the IDs against the current catalog, so parts
/// that disappeared since the save are dropped silently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct SavedSelection(pub BTreeMap<CategoryKey, Vec<PartId>>);

impl SavedSelection {
    /// Check if the saved form carries no IDs at all.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

/// The selection plus the open-picker cursor.
///
/// The cursor is pure UI state: it tracks which category's picker is
/// active and is never persisted. All mutation funnels through the
/// methods here so the invariants hold for any operation sequence.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    selection: Selection,
    open_category: Option<CategoryKey>,
}

impl SelectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            selection: Selection::empty(),
            open_category: None,
        }
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Which category's picker is open, if any.
    pub fn open_category(&self) -> Option<CategoryKey> {
        self.open_category
    }

    /// Choose a part for a category.
    ///
    /// Single-select categories replace their current part; multi-select
    /// categories append unless the same part ID is already present (a
    /// duplicate choose is a no-op, not an error). The picker closes
    /// either way.
    pub fn choose(&mut self, key: CategoryKey, part: Part) {
        let slot = self.selection.slot_mut(key);
        if key.is_multi_select() {
            if !slot.iter().any(|p| p.id == part.id) {
                slot.push(part);
            }
        } else {
            slot.clear();
            slot.push(part);
        }
        self.open_category = None;
    }

    /// Remove parts from a category.
    ///
    /// With `part_id`, removes only that part (no-op if absent); without,
    /// clears the whole category.
    pub fn remove(&mut self, key: CategoryKey, part_id: Option<&PartId>) {
        let slot = self.selection.slot_mut(key);
        match part_id {
            Some(id) => slot.retain(|p| &p.id != id),
            None => slot.clear(),
        }
    }

    /// Clear every category.
    ///
    /// The caller is responsible for also clearing the persisted slot.
    pub fn reset_all(&mut self) {
        self.selection = Selection::empty();
        self.open_category = None;
    }

    /// Open the picker for a category. No effect on selection contents.
    pub fn open_picker(&mut self, key: CategoryKey) {
        self.open_category = Some(key);
    }

    /// Close the picker. No effect on selection contents.
    pub fn close_picker(&mut self) {
        self.open_category = None;
    }

    /// The persisted, ID-only form of the current selection.
    pub fn to_saved(&self) -> SavedSelection {
        SavedSelection(
            self.selection
                .slots
                .iter()
                .map(|(key, parts)| (*key, parts.iter().map(|p| p.id.clone()).collect()))
                .collect(),
        )
    }

    /// Rebuild a store from a saved selection and the current catalog.
    ///
    /// Best effort: IDs that no longer resolve, resolve to a different
    /// category, or repeat within a category are dropped without error.
    /// Single-select categories keep only their first surviving part.
    pub fn rehydrate(saved: &SavedSelection, catalog: &[Part]) -> Self {
        let mut store = Self::new();
        for (key, ids) in &saved.0 {
            for id in ids {
                if key.is_multi_select() || store.selection.parts(*key).is_empty() {
                    if let Some(part) = catalog
                        .iter()
                        .find(|p| &p.id == id && p.category_key == *key)
                    {
                        store.choose(*key, part.clone());
                    }
                }
            }
        }
        store.open_category = None;
        store
    }
}
