//! The eight fixed hardware categories.

use crate::error::UnknownCategoryKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hardware slot a build can fill.
///
/// The set is fixed; variants are declared in the display order the
/// configurator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Cpu,
    Motherboard,
    Gpu,
    Ram,
    Storage,
    Psu,
    Case,
    Cooler,
}

impl CategoryKey {
    /// All categories in display order.
    pub const ALL: [CategoryKey; 8] = [
        CategoryKey::Cpu,
        CategoryKey::Motherboard,
        CategoryKey::Gpu,
        CategoryKey::Ram,
        CategoryKey::Storage,
        CategoryKey::Psu,
        CategoryKey::Case,
        CategoryKey::Cooler,
    ];

    /// The wire/storage key (e.g. "motherboard").
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Cpu => "cpu",
            CategoryKey::Motherboard => "motherboard",
            CategoryKey::Gpu => "gpu",
            CategoryKey::Ram => "ram",
            CategoryKey::Storage => "storage",
            CategoryKey::Psu => "psu",
            CategoryKey::Case => "case",
            CategoryKey::Cooler => "cooler",
        }
    }

    /// Parse a wire/storage key.
    pub fn parse(s: &str) -> Result<Self, UnknownCategoryKey> {
        match s {
            "cpu" => Ok(CategoryKey::Cpu),
            "motherboard" => Ok(CategoryKey::Motherboard),
            "gpu" => Ok(CategoryKey::Gpu),
            "ram" => Ok(CategoryKey::Ram),
            "storage" => Ok(CategoryKey::Storage),
            "psu" => Ok(CategoryKey::Psu),
            "case" => Ok(CategoryKey::Case),
            "cooler" => Ok(CategoryKey::Cooler),
            other => Err(UnknownCategoryKey(other.to_string())),
        }
    }

    /// Whether the category accepts several parts at once.
    ///
    /// RAM, storage and GPU builds legitimately carry multiple entries
    /// (dual kits, extra drives, multi-GPU); everything else holds at most
    /// one part.
    pub fn is_multi_select(&self) -> bool {
        matches!(
            self,
            CategoryKey::Ram | CategoryKey::Storage | CategoryKey::Gpu
        )
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A category with its display label, already localized by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// The fixed key.
    pub key: CategoryKey,
    /// Localized display label.
    pub label: String,
}

impl Category {
    pub fn new(key: CategoryKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for key in CategoryKey::ALL {
            assert_eq!(CategoryKey::parse(key.as_str()), Ok(key));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = CategoryKey::parse("keyboard").unwrap_err();
        assert_eq!(err.0, "keyboard");
    }

    #[test]
    fn test_cardinality_policy() {
        assert!(CategoryKey::Ram.is_multi_select());
        assert!(CategoryKey::Storage.is_multi_select());
        assert!(CategoryKey::Gpu.is_multi_select());
        assert!(!CategoryKey::Cpu.is_multi_select());
        assert!(!CategoryKey::Psu.is_multi_select());
    }

    #[test]
    fn test_serde_uses_wire_key() {
        let json = serde_json::to_string(&CategoryKey::Motherboard).unwrap();
        assert_eq!(json, r#""motherboard""#);
        let key: CategoryKey = serde_json::from_str(r#""case""#).unwrap();
        assert_eq!(key, CategoryKey::Case);
    }
}
