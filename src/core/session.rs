//! The form controller: UI-session state and the transitions between
//! "no user", "user ready" and "task running". Rendering-free so the
//! state machine can be driven directly by tests.

use crate::db::{pool::DbPool, queries};
use crate::errors::{AppError, AppResult};
use crate::utils::time::format_elapsed;
use log::info;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoUser,
    UserReady,
    TaskRunning,
}

/// Transient UI-session state, discarded when the window closes.
/// The displayed clock derives from the locally recorded monotonic start
/// instant, independent of the store's own timestamps.
pub struct Session {
    phase: Phase,
    user_id: Option<i64>,
    username: Option<String>,
    task_name: Option<String>,
    started_at: Option<Instant>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::NoUser,
            user_id: None,
            username: None,
            task_name: None,
            started_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn task_name(&self) -> Option<&str> {
        self.task_name.as_deref()
    }

    /// Submit a username. Empty input is rejected locally, without a store
    /// call. On success the session moves to UserReady and the username
    /// can no longer change.
    pub fn submit_user(&mut self, pool: &DbPool, input: &str) -> AppResult<i64> {
        if self.phase != Phase::NoUser {
            return Err(AppError::Other("username is already set".to_string()));
        }
        let username = input.trim();
        if username.is_empty() {
            return Err(AppError::Input("Username"));
        }

        let user_id = queries::get_or_create_user(pool, username)?;
        self.user_id = Some(user_id);
        self.username = Some(username.to_string());
        self.phase = Phase::UserReady;
        info!("User '{username}' set up with id {user_id}");
        Ok(user_id)
    }

    /// Start a named task. Only permitted in UserReady; empty input is
    /// rejected locally. The monotonic instant is recorded before the
    /// store call so the displayed clock excludes store latency.
    pub fn start_task(&mut self, pool: &DbPool, input: &str) -> AppResult<()> {
        if self.phase != Phase::UserReady {
            return Err(AppError::Other(
                "a task can only start once a user is ready".to_string(),
            ));
        }
        let task_name = input.trim();
        if task_name.is_empty() {
            return Err(AppError::Input("Task name"));
        }
        let user_id = self.user_id.ok_or(AppError::Other(
            "no user id recorded for this session".to_string(),
        ))?;

        let started = Instant::now();
        queries::start_task(pool, user_id, task_name)?;

        self.task_name = Some(task_name.to_string());
        self.started_at = Some(started);
        self.phase = Phase::TaskRunning;
        info!("Task '{task_name}' started");
        Ok(())
    }

    /// Stop the running task. The display stops on the locally measured
    /// elapsed seconds, which are returned for the completion message;
    /// the store closes the entry with its own clock.
    pub fn stop_task(&mut self, pool: &DbPool) -> AppResult<u64> {
        if self.phase != Phase::TaskRunning {
            return Err(AppError::Other("no task is running".to_string()));
        }
        let elapsed = self
            .started_at
            .map(|t| t.elapsed().as_secs())
            .unwrap_or(0);
        let user_id = self.user_id.unwrap_or_default();
        let task_name = self.task_name.take().unwrap_or_default();

        // back to UserReady even if the store call fails, so the form
        // stays usable and the error is shown instead of a stuck timer
        self.started_at = None;
        self.phase = Phase::UserReady;

        let affected = queries::finish_task(pool, user_id, &task_name)?;
        info!(
            "Task '{}' stopped after {} seconds ({} row(s) updated)",
            task_name, elapsed, affected
        );
        Ok(elapsed)
    }

    /// The live HH:MM:SS readout, recomputed from the start instant on
    /// every tick while a task runs.
    pub fn elapsed_display(&self) -> String {
        match self.started_at {
            Some(started) if self.phase == Phase::TaskRunning => {
                format_elapsed(started.elapsed().as_secs())
            }
            _ => format_elapsed(0),
        }
    }
}
