use chrono::Utc;

use super::{decode, encode, JobRepository};
use crate::db::{kv_repo, Database};
use crate::error::StorageError;
use crate::job::Job;

/// Stores the collection blob in the `kv_store` table.
pub struct SqliteRepository {
    db: Database,
    key: String,
}

impl SqliteRepository {
    pub fn new(db: Database, key: impl Into<String>) -> Self {
        Self { db, key: key.into() }
    }
}

impl JobRepository for SqliteRepository {
    fn load(&self) -> Result<Vec<Job>, StorageError> {
        match kv_repo::get(&self.db, &self.key)? {
            Some(blob) => {
                let jobs = decode(&self.key, &blob)?;
                log::info!("Loaded {} jobs from database key '{}'", jobs.len(), self.key);
                Ok(jobs)
            }
            None => Ok(Vec::new()),
        }
    }

    fn save_all(&self, jobs: &[Job]) -> Result<(), StorageError> {
        let blob = encode(jobs)?;
        kv_repo::put(&self.db, &self.key, &blob, &Utc::now().to_rfc3339())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    use crate::job::{Color, JobStatus, Port, Section};

    fn sample_job(id: u64) -> Job {
        Job {
            id,
            date: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
            color: Color::Black,
            port: Port::Vct,
            status: JobStatus::Examiner,
            section: Section::new(11).unwrap(),
            entry_no: format!("E{}", id),
            container_no: "OOLU2222222".to_string(),
            remarks: None,
            created_at: Utc.with_ymd_and_hms(2025, 11, 30, 12, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_database_loads_empty() {
        let repo = SqliteRepository::new(Database::open_in_memory().unwrap(), "jobs");
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqliteRepository::new(db.clone(), "jobs");

        repo.save_all(&[sample_job(1), sample_job(2)]).unwrap();
        repo.save_all(&[sample_job(2)]).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, vec![sample_job(2)]);
        let blob = kv_repo::get(&db, "jobs").unwrap().unwrap();
        assert_eq!(blob.matches("\"id\"").count(), 1);
    }

    #[test]
    fn test_corrupt_blob() {
        let db = Database::open_in_memory().unwrap();
        kv_repo::put(&db, "jobs", "oops", "2026-01-01T00:00:00Z").unwrap();

        let repo = SqliteRepository::new(db, "jobs");
        assert!(matches!(repo.load(), Err(StorageError::Corrupt { .. })));
    }
}
