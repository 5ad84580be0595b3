//! Newtype ID for catalog parts.
//!
//! Part IDs only ever come from the catalog (e.g. "cpu-1"); there is no
//! generation here, just a typed wrapper so an ID cannot be confused with
//! any other string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique part identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(String);

impl PartId {
    /// Create an ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PartId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PartId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PartId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = PartId::new("cpu-1");
        assert_eq!(id.as_str(), "cpu-1");
        assert_eq!(format!("{}", id), "cpu-1");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(PartId::from("gpu-2"), PartId::new("gpu-2"));
        assert_ne!(PartId::from("gpu-2"), PartId::new("gpu-3"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&PartId::new("ram-1")).unwrap();
        assert_eq!(json, r#""ram-1""#);
    }
}
