use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{pool::DbPool, queries};
use crate::errors::{AppError, AppResult};

/// Stop an open task from the command line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop { username, task } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let user = queries::get_user(&pool, username.trim())?
            .ok_or_else(|| AppError::Other(format!("unknown user '{}'", username.trim())))?;

        let affected = queries::finish_task(&pool, user.id, task.trim())?;
        if affected == 0 {
            println!("No open entry for task '{}', nothing to stop.", task.trim());
        } else {
            println!("Stopped task '{}' for user '{}'.", task.trim(), username.trim());
        }
    }
    Ok(())
}
