use crate::config::Config;
use crate::db::{pool::DbPool, queries};
use crate::errors::AppResult;

/// Print every known username.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let names = queries::list_usernames(&pool);

    if names.is_empty() {
        println!("No users recorded yet.");
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}
