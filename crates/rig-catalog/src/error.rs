//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when reading the part catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to open the database.
    #[error("Failed to open database: {0}")]
    OpenError(String),

    /// A query failed to execute.
    #[error("Query failed: {0}")]
    QueryError(String),

    /// A row came back with an unexpected shape.
    #[error("Malformed row: {0}")]
    MalformedRow(String),
}
