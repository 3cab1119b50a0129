//! JSON blob files, one per key, in a data directory.

use std::path::{Path, PathBuf};

use super::{decode, encode, JobRepository};
use crate::error::StorageError;
use crate::job::Job;

pub struct JsonFileRepository {
    data_dir: PathBuf,
    key: String,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(data_dir: P, key: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            key: key.into(),
        }
    }

    /// `<data_dir>/<key>.json`
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.key))
    }

    fn ensure_directory(&self) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| StorageError::CreateDirectory {
            path: self.data_dir.clone(),
            source: e,
        })
    }
}

impl JobRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Job>, StorageError> {
        let path = self.path();
        let blob = match std::fs::read_to_string(&path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No job file at {}, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::ReadFile { path, source: e }),
        };

        let jobs = decode(&self.key, &blob)?;
        log::info!("Loaded {} jobs from {}", jobs.len(), path.display());
        Ok(jobs)
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// crash mid-write leaves the previous collection intact.
    fn save_all(&self, jobs: &[Job]) -> Result<(), StorageError> {
        self.ensure_directory()?;
        let blob = encode(jobs)?;

        let path = self.path();
        let tmp = self.data_dir.join(format!(".{}.json.tmp", self.key));
        std::fs::write(&tmp, blob).map_err(|e| StorageError::WriteFile {
            path: tmp.clone(),
            source: e,
        })?;
        std::fs::rename(&tmp, &path).map_err(|e| StorageError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        log::debug!("Saved {} jobs to {}", jobs.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::job::{Color, JobStatus, Port, Section};

    fn sample_job(id: u64) -> Job {
        Job {
            id,
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            color: Color::Orange,
            port: Port::Agct,
            status: JobStatus::Final,
            section: Section::new(5).unwrap(),
            entry_no: format!("E{}", id),
            container_no: "HLBU1111111".to_string(),
            remarks: Some("fragile".to_string()),
            created_at: Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(temp.path(), "jobs");
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.child("data");
        let repo = JsonFileRepository::new(data_dir.path(), "jobs");

        let jobs = vec![sample_job(1), sample_job(2)];
        repo.save_all(&jobs).unwrap();

        assert!(data_dir.child("jobs.json").path().exists());
        assert!(!data_dir.child(".jobs.json.tmp").path().exists());
        assert_eq!(repo.load().unwrap(), jobs);
    }

    #[test]
    fn test_corrupt_file() {
        let temp = TempDir::new().unwrap();
        temp.child("jobs.json").write_str("[{\"id\": ").unwrap();

        let repo = JsonFileRepository::new(temp.path(), "jobs");
        assert!(matches!(repo.load(), Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn test_keys_are_separate_files() {
        let temp = TempDir::new().unwrap();
        let a = JsonFileRepository::new(temp.path(), "jobs");
        let b = JsonFileRepository::new(temp.path(), "archive");
        a.save_all(&[sample_job(1)]).unwrap();

        assert_eq!(a.load().unwrap().len(), 1);
        assert!(b.load().unwrap().is_empty());
    }
}
