//! Catalog construction errors.

use thiserror::Error;

/// Errors raised while loading or validating a catalog.
///
/// Construction is the engine's only fallible surface; everything past a
/// built [`Catalog`](crate::Catalog) is pure and total.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog JSON could not be parsed into store records.
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share a store id.
    #[error("duplicate store id: {0}")]
    DuplicateId(String),

    /// A record's hours table is missing weekday entries.
    #[error("store {id} is missing hours for: {days}")]
    IncompleteHours { id: String, days: String },
}
