use std::sync::RwLock;

use super::JobRepository;
use crate::error::StorageError;
use crate::job::Job;

/// Keeps the collection in memory only.
#[derive(Default)]
pub struct MemoryRepository {
    jobs: RwLock<Vec<Job>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Job>, StorageError> {
        let guard = self.jobs.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.clone())
    }

    fn save_all(&self, jobs: &[Job]) -> Result<(), StorageError> {
        let mut guard = self.jobs.write().map_err(|_| StorageError::LockPoisoned)?;
        *guard = jobs.to_vec();
        Ok(())
    }
}
