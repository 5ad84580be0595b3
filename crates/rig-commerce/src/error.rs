//! Domain error types.

use thiserror::Error;

/// Returned when a string does not name one of the eight fixed categories.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category key: {0}")]
pub struct UnknownCategoryKey(pub String);
