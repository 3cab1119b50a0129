use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobtrackError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Job error: {0}")]
    Job(#[from] JobError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Database error: {0}")]
    Database(#[from] crate::db::DatabaseError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

/// Errors raised while turning user input into job fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    #[error("Unknown status '{0}'")]
    UnknownStatus(String),

    #[error("Unknown port '{0}'")]
    UnknownPort(String),

    #[error("Unknown sort field '{0}'")]
    UnknownSortField(String),

    #[error("Section must be between 1 and 15, got {0}")]
    SectionOutOfRange(i64),

    #[error("Invalid section '{0}'")]
    InvalidSection(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored job collection under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize job collection: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] crate::db::DatabaseError),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Job {0} not found")]
    NotFound(u64),

    #[error("Invalid job: {0}")]
    Invalid(#[from] JobError),

    #[error("No job ids left above the largest stored id")]
    IdSpaceExhausted,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
