use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{initialize::init_db, pool::DbPool, queries};
use crate::errors::{AppError, AppResult};

/// Start a task from the command line, creating the user on first use.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { username, task } = cmd {
        if username.trim().is_empty() {
            return Err(AppError::Input("Username"));
        }
        if task.trim().is_empty() {
            return Err(AppError::Input("Task name"));
        }

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool)?;

        let user_id = queries::get_or_create_user(&pool, username.trim())?;
        queries::start_task(&pool, user_id, task.trim())?;

        println!("Started task '{}' for user '{}' (id {}).", task.trim(), username.trim(), user_id);
    }
    Ok(())
}
