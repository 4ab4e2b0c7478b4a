use chrono::NaiveDateTime;
use serde::Serialize;

/// Store timestamp layout produced by datetime('now').
const STORE_TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single tracked interval. `finish` stays NULL while the entry is open.
#[derive(Debug, Clone, Serialize)]
pub struct TaskEntry {
    pub id: i64,
    pub user_id: i64,           // ⇔ tasks.user_id (FK to users.id)
    pub task: String,
    pub start: String,          // ⇔ tasks.start (TEXT, ISO 8601 UTC)
    pub finish: Option<String>, // ⇔ tasks.finish (TEXT or NULL)
}

impl TaskEntry {
    pub fn is_open(&self) -> bool {
        self.finish.is_none()
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.start, STORE_TS_FORMAT).ok()
    }

    pub fn finish_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.finish.as_deref()?, STORE_TS_FORMAT).ok()
    }

    /// Persisted duration in seconds, when the entry is closed and both
    /// timestamps parse.
    pub fn duration_seconds(&self) -> Option<i64> {
        let start = self.start_time()?;
        let finish = self.finish_time()?;
        Some((finish - start).num_seconds())
    }
}
