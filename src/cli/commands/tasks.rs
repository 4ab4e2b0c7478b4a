use crate::config::Config;
use crate::db::{pool::DbPool, queries};
use crate::errors::AppResult;

/// Print every task name ever tracked.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let names = queries::list_task_names(&pool);

    if names.is_empty() {
        println!("No tasks recorded yet.");
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}
