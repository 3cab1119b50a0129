//! Test harness for stores backed by a temporary data directory.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use jobtrack::config::{StorageBackend, StorageConfig};
use jobtrack::{open_repository, JobStore};

/// Isolated data directory plus helpers to (re)open stores in it.
pub struct TestHarness {
    temp_dir: TempDir,
    /// Data directory inside `temp_dir`.
    pub data_dir: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        Self { temp_dir, data_dir }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Storage configuration pointing at this harness.
    pub fn storage_config(&self, backend: StorageBackend) -> StorageConfig {
        StorageConfig {
            backend,
            path: Some(self.data_dir.clone()),
            key: "jobs".to_string(),
        }
    }

    /// Open a fresh store over the given backend. Calling this twice
    /// simulates an application restart.
    pub fn open_store(&self, backend: StorageBackend) -> JobStore {
        let repo = open_repository(&self.storage_config(backend)).expect("Failed to open repository");
        JobStore::open(repo).expect("Failed to open store")
    }

    /// Write a raw collection blob as the JSON backend would find it.
    pub fn write_json_blob(&self, content: &str) -> PathBuf {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        let path = self.data_dir.join("jobs.json");
        std::fs::write(&path, content).expect("Failed to write blob");
        path
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
