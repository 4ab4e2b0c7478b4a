//! Tests for the form controller state machine, the elapsed-time
//! formatting and the advisory suggestion file.

use std::env;
use std::fs;
use std::path::PathBuf;

use ttrack::core::session::{Phase, Session};
use ttrack::core::suggestions;
use ttrack::db::{initialize, pool::DbPool, queries};
use ttrack::errors::AppError;
use ttrack::utils::time::format_elapsed;

fn test_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    initialize::init_db(&pool).expect("schema");
    pool
}

// ---------------------------------------------------------------
// elapsed-time formatting
// ---------------------------------------------------------------

#[test]
fn format_elapsed_zero_pads() {
    assert_eq!(format_elapsed(0), "00:00:00");
    assert_eq!(format_elapsed(5), "00:00:05");
    assert_eq!(format_elapsed(3725), "01:02:05");
}

#[test]
fn format_elapsed_does_not_wrap_after_a_day() {
    // 25h 1m 1s
    assert_eq!(format_elapsed(25 * 3600 + 61), "25:01:01");
}

// ---------------------------------------------------------------
// controller state machine
// ---------------------------------------------------------------

#[test]
fn session_starts_without_a_user() {
    let session = Session::new();
    assert_eq!(session.phase(), Phase::NoUser);
    assert_eq!(session.user_id(), None);
    assert_eq!(session.elapsed_display(), "00:00:00");
}

#[test]
fn empty_username_is_rejected_locally() {
    let pool = test_pool();
    let mut session = Session::new();

    let err = session.submit_user(&pool, "   ").unwrap_err();
    assert!(matches!(err, AppError::Input(_)));
    assert_eq!(session.phase(), Phase::NoUser);

    // no store call happened
    assert!(queries::list_usernames(&pool).is_empty());
}

#[test]
fn submitting_a_user_moves_to_user_ready() {
    let pool = test_pool();
    let mut session = Session::new();

    let user_id = session.submit_user(&pool, "alice").unwrap();
    assert_eq!(session.phase(), Phase::UserReady);
    assert_eq!(session.user_id(), Some(user_id));
    assert_eq!(session.username(), Some("alice"));

    // username edits are disabled afterwards
    let err = session.submit_user(&pool, "bob").unwrap_err();
    assert!(matches!(err, AppError::Other(_)));
}

#[test]
fn empty_task_name_is_rejected_locally() {
    let pool = test_pool();
    let mut session = Session::new();
    session.submit_user(&pool, "alice").unwrap();

    let err = session.start_task(&pool, "").unwrap_err();
    assert!(matches!(err, AppError::Input(_)));
    assert_eq!(session.phase(), Phase::UserReady);
}

#[test]
fn a_task_cannot_start_before_a_user_is_ready() {
    let pool = test_pool();
    let mut session = Session::new();

    let err = session.start_task(&pool, "writing").unwrap_err();
    assert!(matches!(err, AppError::Other(_)));
    assert_eq!(session.phase(), Phase::NoUser);
}

#[test]
fn start_stop_cycles_back_to_user_ready() {
    let pool = test_pool();
    let mut session = Session::new();
    let user_id = session.submit_user(&pool, "alice").unwrap();

    session.start_task(&pool, "writing").unwrap();
    assert_eq!(session.phase(), Phase::TaskRunning);
    assert_eq!(session.task_name(), Some("writing"));
    assert!(session.elapsed_display().starts_with("00:00:0"));

    let entries = queries::list_entries_for_user(&pool, user_id, 10).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_open());

    session.stop_task(&pool).unwrap();
    assert_eq!(session.phase(), Phase::UserReady);
    assert_eq!(session.task_name(), None);

    let entries = queries::list_entries_for_user(&pool, user_id, 10).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].is_open());
    assert!(entries[0].duration_seconds().unwrap() >= 0);

    // a new task can start without re-entering the username
    session.start_task(&pool, "reading").unwrap();
    assert_eq!(session.phase(), Phase::TaskRunning);
}

#[test]
fn stopping_without_a_running_task_is_an_error() {
    let pool = test_pool();
    let mut session = Session::new();
    session.submit_user(&pool, "alice").unwrap();

    let err = session.stop_task(&pool).unwrap_err();
    assert!(matches!(err, AppError::Other(_)));
    assert_eq!(session.phase(), Phase::UserReady);
}

#[test]
fn double_start_keeps_the_session_usable() {
    let pool = test_pool();
    let mut session = Session::new();
    let user_id = session.submit_user(&pool, "alice").unwrap();

    // another client opened the same task in the meantime
    queries::start_task(&pool, user_id, "writing").unwrap();

    let err = session.start_task(&pool, "writing").unwrap_err();
    assert!(matches!(err, AppError::TaskAlreadyActive { .. }));
    assert_eq!(session.phase(), Phase::UserReady);
}

// ---------------------------------------------------------------
// advisory suggestion file
// ---------------------------------------------------------------

fn temp_suggestion_file(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_ttrack_usernames.txt", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn missing_suggestion_file_is_an_empty_list() {
    let path = temp_suggestion_file("missing");
    assert!(suggestions::load(&path).is_empty());
}

#[test]
fn append_then_load_roundtrip() {
    let path = temp_suggestion_file("roundtrip");

    suggestions::append(&path, "alice").unwrap();
    suggestions::append(&path, "bob").unwrap();

    assert_eq!(suggestions::load(&path), vec!["alice", "bob"]);
    fs::remove_file(&path).ok();
}

#[test]
fn reconcile_merges_with_the_store_list() {
    let local = vec!["carol".to_string(), "alice".to_string()];
    let store = vec!["alice".to_string(), "bob".to_string()];

    assert_eq!(
        suggestions::reconcile(local, &store),
        vec!["alice", "bob", "carol"]
    );
}
