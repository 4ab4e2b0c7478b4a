//! The persistence gateway: the logical user/task operations translated
//! into SQL. Every operation commits individually and logs its outcome.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{TaskEntry, User};
use log::{error, info, warn};
use rusqlite::{OptionalExtension, Row, params};

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(f, _)
            if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
    })
}

fn row_to_task_entry(row: &Row) -> rusqlite::Result<TaskEntry> {
    Ok(TaskEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        task: row.get("task")?,
        start: row.get("start")?,
        finish: row.get("finish")?,
    })
}

/// Look up a user by name.
pub fn get_user(pool: &DbPool, username: &str) -> AppResult<Option<User>> {
    let user = pool
        .conn
        .prepare_cached("SELECT id, username FROM users WHERE username = ?1")?
        .query_row([username], row_to_user)
        .optional()?;
    Ok(user)
}

/// Insert a new user row and return its generated id.
pub fn add_user(pool: &DbPool, username: &str) -> AppResult<i64> {
    match pool
        .conn
        .execute("INSERT INTO users (username) VALUES (?1)", [username])
    {
        Ok(_) => {
            let id = pool.conn.last_insert_rowid();
            info!("User '{username}' added successfully with id {id}");
            Ok(id)
        }
        Err(e) if is_unique_violation(&e) => {
            error!("User '{username}' already exists");
            Err(AppError::DuplicateUser(username.to_string()))
        }
        Err(e) => {
            error!("Error adding user '{username}': {e}");
            Err(e.into())
        }
    }
}

/// Return the id for `username`, creating the row on first submission.
/// Repeated calls with the same name return the same id.
pub fn get_or_create_user(pool: &DbPool, username: &str) -> AppResult<i64> {
    if let Some(user) = get_user(pool, username)? {
        info!("User '{}' already exists with id {}", user.username, user.id);
        return Ok(user.id);
    }
    add_user(pool, username)
}

/// Insert a new open task entry with a store-generated start timestamp.
/// A unique-constraint violation means an open entry for this (user, task)
/// pair already exists.
pub fn start_task(pool: &DbPool, user_id: i64, task_name: &str) -> AppResult<()> {
    match pool.conn.execute(
        "INSERT INTO tasks (user_id, task, start) VALUES (?1, ?2, datetime('now'))",
        params![user_id, task_name],
    ) {
        Ok(_) => {
            info!("Task '{task_name}' for user id {user_id} started successfully");
            Ok(())
        }
        Err(e) if is_unique_violation(&e) => {
            error!("Task '{task_name}' for user id {user_id} is already open");
            Err(AppError::TaskAlreadyActive {
                user_id,
                task: task_name.to_string(),
            })
        }
        Err(e) => {
            error!("Error starting task '{task_name}' for user id {user_id}: {e}");
            Err(e.into())
        }
    }
}

/// Close the open entry matching (user, task), setting a store-generated
/// finish timestamp. Zero affected rows is a no-op, not an error.
pub fn finish_task(pool: &DbPool, user_id: i64, task_name: &str) -> AppResult<usize> {
    let affected = pool
        .conn
        .execute(
            "UPDATE tasks SET finish = datetime('now')
             WHERE user_id = ?1 AND task = ?2 AND finish IS NULL",
            params![user_id, task_name],
        )
        .inspect_err(|e| {
            error!("Error finishing task '{task_name}' for user id {user_id}: {e}");
        })?;

    if affected == 0 {
        warn!("No open entry for task '{task_name}' and user id {user_id}, nothing to finish");
    } else {
        info!("Task '{task_name}' for user id {user_id} finished successfully");
    }
    Ok(affected)
}

fn list_column(pool: &DbPool, sql: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = pool.conn.prepare_cached(sql)?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// All known usernames, sorted. Degrades to an empty list on store error.
pub fn list_usernames(pool: &DbPool) -> Vec<String> {
    match list_column(pool, "SELECT username FROM users ORDER BY username ASC") {
        Ok(names) => names,
        Err(e) => {
            error!("Error listing usernames: {e}");
            Vec::new()
        }
    }
}

/// All distinct task names ever tracked, sorted. Degrades to an empty list
/// on store error.
pub fn list_task_names(pool: &DbPool) -> Vec<String> {
    match list_column(pool, "SELECT DISTINCT task FROM tasks ORDER BY task ASC") {
        Ok(names) => names,
        Err(e) => {
            error!("Error listing task names: {e}");
            Vec::new()
        }
    }
}

/// The most recent entries for a user, newest first.
pub fn list_entries_for_user(pool: &DbPool, user_id: i64, limit: usize) -> AppResult<Vec<TaskEntry>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, user_id, task, start, finish FROM tasks
         WHERE user_id = ?1 ORDER BY id DESC LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![user_id, limit as i64], row_to_task_entry)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}
