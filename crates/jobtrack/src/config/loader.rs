use std::path::{Path, PathBuf};

use crate::config::schema::{default_base_dir, Config, CONFIG_VERSION};
use crate::error::ConfigError;

pub const MAX_ITEMS_PER_PAGE: usize = 500;

/// `~/.jobtrack/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    default_base_dir().map(|base| base.join("config.json"))
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = load_config_from_str(&content)?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Loads an explicitly requested config file, or the default one when it
/// exists, or falls back to built-in defaults.
pub fn load_or_default(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config(path),
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    let per_page = config.view.items_per_page;
    if per_page == 0 || per_page > MAX_ITEMS_PER_PAGE {
        return Err(ConfigError::Validation {
            message: format!(
                "view.items_per_page must be between 1 and {}, got {}",
                MAX_ITEMS_PER_PAGE, per_page
            ),
        });
    }

    let key = &config.storage.key;
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ConfigError::Validation {
            message: format!(
                "storage.key '{}' may only contain letters, digits, '_' and '-'",
                key
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{LogFormat, StorageBackend};
    use crate::view::SortField;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = load_config_from_str(r#"{ "version": "1.0" }"#).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.view.items_per_page, 10);
        assert_eq!(config.view.sort, SortField::Date);
        assert_eq!(config.storage.backend, StorageBackend::Json);
        assert_eq!(config.storage.key, "jobs");
    }

    #[test]
    fn test_full_config() {
        let config_json = r#"
        {
            "version": "1.0",
            "storage": { "backend": "sqlite", "path": "/var/lib/jobtrack", "key": "jobs-2026" },
            "view": { "items_per_page": 25, "sort": "entryNo" },
            "logging": { "level": "debug", "format": "json" }
        }
        "#;

        let config = load_config_from_str(config_json).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(
            config.storage.database_path(),
            Path::new("/var/lib/jobtrack").join("jobtrack.db")
        );
        assert_eq!(config.view.items_per_page, 25);
        assert_eq!(config.view.sort, SortField::EntryNo);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = load_config_from_str(r#"{ "version": "2.0" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn test_rejects_bad_page_size() {
        for size in ["0", "501"] {
            let json = format!(r#"{{ "version": "1.0", "view": {{ "items_per_page": {} }} }}"#, size);
            assert!(matches!(
                load_config_from_str(&json),
                Err(ConfigError::Validation { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_bad_key() {
        let json = r#"{ "version": "1.0", "storage": { "key": "../jobs" } }"#;
        assert!(matches!(
            load_config_from_str(json),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            load_config_from_str("{"),
            Err(ConfigError::ParseJson(_))
        ));
    }

    #[test]
    fn test_load_config_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_or_default(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "version": "1.0", "view": { "items_per_page": 50 } }"#).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.view.items_per_page, 50);
    }
}
