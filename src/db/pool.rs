//! SQLite connection wrapper (one long-lived handle per process).

use crate::errors::AppResult;
use log::info;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.pragma_update(None, "foreign_keys", true)?;
        info!("Connected to database at '{path}'");
        Ok(Self { conn })
    }

    /// In-memory database, used by the library-level tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }
}

impl Drop for DbPool {
    fn drop(&mut self) {
        info!("Database connection closed");
    }
}
