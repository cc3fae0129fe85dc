use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::Database;

impl Database {
    /// Raw string stored under `key`, if any.
    pub fn get_preference(&self, key: &str) -> Result<Option<String>> {
        self.connection()
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .context(format!("Failed to read preference '{}'", key))
    }

    /// Insert or overwrite the value stored under `key`.
    pub fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.connection()
            .execute(
                "INSERT INTO preferences (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value],
            )
            .context(format!("Failed to write preference '{}'", key))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_missing_preference_is_none() {
        let db = setup_test_db();
        assert_eq!(db.get_preference("absent").unwrap(), None);
    }

    #[test]
    fn test_set_then_overwrite_preference() {
        let db = setup_test_db();
        db.set_preference("zoom", "1.25").unwrap();
        db.set_preference("zoom", "0.9").unwrap();
        assert_eq!(db.get_preference("zoom").unwrap().as_deref(), Some("0.9"));
    }

    #[test]
    fn test_write_fails_without_schema() {
        let db = Database::new(":memory:").unwrap();
        assert!(db.set_preference("zoom", "1.0").is_err());
    }
}
