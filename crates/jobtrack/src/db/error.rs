//! Errors raised by the SQLite layer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Creating the database directory failed.
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Migration v{version} ({description}) failed: {reason}")]
    Migration {
        version: u32,
        description: &'static str,
        reason: String,
    },

    /// Keys are limited to `[A-Za-z0-9_-]`.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("Database lock poisoned")]
    LockPoisoned,
}
