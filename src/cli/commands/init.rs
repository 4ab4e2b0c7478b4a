use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{initialize::init_db, pool::DbPool};
use crate::errors::AppResult;

/// Create config and database files, then the schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool)?;
    println!("Database schema ready.");

    Ok(())
}
