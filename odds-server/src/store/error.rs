//! Route store error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors raised while loading routes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Opening the SQLite database failed
    #[error("failed to open routes database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Querying the routes table failed
    #[error("failed to read routes: {0}")]
    Query(#[from] rusqlite::Error),

    /// A stored route violates the domain rules
    #[error("invalid route in row {row}: {source}")]
    InvalidRoute {
        row: i64,
        #[source]
        source: DomainError,
    },

    /// A previous reader panicked while holding the connection
    #[error("routes database connection is poisoned")]
    Poisoned,
}
