//! Whole-collection persistence for jobs.
//!
//! Every backend stores the collection as one JSON array under a single
//! key: load it all at startup, overwrite it all after each mutation.

pub mod json_file;
pub mod memory;
pub mod sqlite;

use crate::config::{StorageBackend, StorageConfig};
use crate::db::Database;
use crate::error::StorageError;
use crate::job::Job;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;
pub use sqlite::SqliteRepository;

/// Persistence collaborator injected into the job store.
pub trait JobRepository: Send + Sync {
    /// Loads the full collection. A missing collection loads as empty.
    fn load(&self) -> Result<Vec<Job>, StorageError>;

    /// Overwrites the stored collection.
    fn save_all(&self, jobs: &[Job]) -> Result<(), StorageError>;
}

pub(crate) fn encode(jobs: &[Job]) -> Result<String, StorageError> {
    serde_json::to_string(jobs).map_err(StorageError::Serialize)
}

pub(crate) fn decode(key: &str, blob: &str) -> Result<Vec<Job>, StorageError> {
    if blob.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(blob).map_err(|source| StorageError::Corrupt {
        key: key.to_string(),
        source,
    })
}

/// Builds the repository selected by the storage configuration.
pub fn open_repository(config: &StorageConfig) -> Result<Box<dyn JobRepository>, StorageError> {
    let repo: Box<dyn JobRepository> = match config.backend {
        StorageBackend::Memory => Box::new(MemoryRepository::new()),
        StorageBackend::Json => {
            Box::new(JsonFileRepository::new(config.data_dir(), config.key.clone()))
        }
        StorageBackend::Sqlite => {
            let db = Database::open(&config.database_path())?;
            Box::new(SqliteRepository::new(db, config.key.clone()))
        }
    };
    log::debug!("Opened {:?} job repository", config.backend);
    Ok(repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_blank_is_empty() {
        assert!(decode("jobs", "").unwrap().is_empty());
        assert!(decode("jobs", "[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_corrupt() {
        let err = decode("jobs", "{not json").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { ref key, .. } if key == "jobs"));
    }

    #[test]
    fn test_open_memory_repository() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };
        let repo = open_repository(&config).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }
}
