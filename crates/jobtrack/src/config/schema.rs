use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::db;
use crate::view::{SortField, DEFAULT_ITEMS_PER_PAGE};

pub const CONFIG_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            storage: StorageConfig::default(),
            view: ViewConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Data directory; defaults to `~/.jobtrack/data`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Key the collection is stored under.
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    "jobs".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: None,
            key: default_key(),
        }
    }
}

impl StorageConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.path
            .clone()
            .or_else(|| default_base_dir().map(|base| base.join("data")))
            .unwrap_or_else(|| PathBuf::from(".jobtrack").join("data"))
    }

    pub fn database_path(&self) -> PathBuf {
        db::database_path(&self.data_dir())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    #[serde(default)]
    pub sort: SortField,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            sort: SortField::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `warn` or `jobtrack=debug`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// `~/.jobtrack`
pub fn default_base_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jobtrack"))
}
