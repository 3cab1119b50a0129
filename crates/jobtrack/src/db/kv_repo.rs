//! Key-value repository over the `kv_store` table.

use rusqlite::{params, OptionalExtension};

use super::{Database, DatabaseError};

fn check_key(key: &str) -> Result<(), DatabaseError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(DatabaseError::InvalidKey(key.to_string()))
    }
}

/// Returns the value stored under `key`, if any.
pub fn get(db: &Database, key: &str) -> Result<Option<String>, DatabaseError> {
    check_key(key)?;
    db.with_conn(|conn| {
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(value)
    })
}

/// Inserts or overwrites the value under `key`.
pub fn put(db: &Database, key: &str, value: &str, updated_at: &str) -> Result<(), DatabaseError> {
    check_key(key)?;
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, updated_at],
        )?;
        Ok(())
    })
}
