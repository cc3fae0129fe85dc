use anyhow::{Context, Result};
use rusqlite::Connection;

use super::schema;

/// SQLite file holding the grid's persisted preferences.
///
/// The only table is the `preferences` key/value store, which keeps the
/// calibration offset across restarts. Reads and writes go through
/// `get_preference` and `set_preference`.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the preferences database, creating the file if needed.
    /// Pass `":memory:"` for a throwaway store.
    ///
    /// # Examples
    /// ```
    /// use rust_calendar_grid::services::database::Database;
    /// let db = Database::new(":memory:").unwrap();
    /// db.initialize_schema().unwrap();
    /// assert_eq!(db.get_preference("time_grid.calibration_offset_px").unwrap(), None);
    /// ```
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open preferences database at {}", path))?;

        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Create the `preferences` table if it is missing. Run on every startup.
    pub fn initialize_schema(&self) -> Result<()> {
        schema::initialize_schema(self.connection())
    }
}
