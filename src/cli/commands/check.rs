use crate::config::Config;
use crate::db::{initialize::list_tracked_tables, pool::DbPool};
use crate::errors::AppResult;

const EXPECTED_TABLES: [&str; 2] = ["users", "tasks"];

/// Startup diagnostics: connect and report which tracked tables exist.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let tables = list_tracked_tables(&pool);

    println!("Database: {}", cfg.database);
    println!("Tracked tables ({}):", tables.len());
    for t in &tables {
        println!("  {t}");
    }

    for expected in EXPECTED_TABLES {
        if !tables.iter().any(|t| t == expected) {
            println!("Missing table '{expected}' - run `ttrack init` first.");
        }
    }

    Ok(())
}
