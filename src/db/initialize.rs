//! Database schema creation and startup introspection.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use log::{error, info};

/// Schema for the two tracked tables.
/// The partial unique index keeps at most one open entry per (user, task),
/// which is what lets `start_task` report an already-running task.
const INITIALIZE: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        email    TEXT UNIQUE
    );

    CREATE TABLE IF NOT EXISTS tasks (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        task    TEXT NOT NULL,
        start   TEXT NOT NULL,       -- ISO 8601 UTC, store-generated
        finish  TEXT                 -- NULL while the entry is open
    );

    CREATE UNIQUE INDEX IF NOT EXISTS idx_tasks_open
        ON tasks(user_id, task) WHERE finish IS NULL;
";

/// Ensure the expected tables exist.
pub fn init_db(pool: &DbPool) -> AppResult<()> {
    pool.conn.execute_batch(INITIALIZE)?;
    info!("Database schema initialized");
    Ok(())
}

/// Diagnostic introspection, run at startup: logs which tracked tables the
/// store actually contains. Degrades to an empty list on store error.
pub fn list_tracked_tables(pool: &DbPool) -> Vec<String> {
    let query = || -> rusqlite::Result<Vec<String>> {
        let mut stmt = pool.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name ASC",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        rows.collect()
    };

    match query() {
        Ok(tables) => {
            info!(
                "The database contains {} tracked tables: {:?}",
                tables.len(),
                tables
            );
            tables
        }
        Err(e) => {
            error!("Error selecting tables from the database: {e}");
            Vec::new()
        }
    }
}
