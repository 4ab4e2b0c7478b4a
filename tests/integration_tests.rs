use predicates::str::contains;

mod common;
use common::{init_test_db, setup_test_db, ttr};

#[test]
fn test_init_creates_database_file() {
    let db_path = setup_test_db("init_creates");

    init_test_db(&db_path);

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_check_reports_tracked_tables() {
    let db_path = setup_test_db("check_tables");
    init_test_db(&db_path);

    ttr()
        .args(["--db", &db_path, "--test", "check"])
        .assert()
        .success()
        .stdout(contains("users"))
        .stdout(contains("tasks"));
}

#[test]
fn test_start_and_stop_roundtrip() {
    let db_path = setup_test_db("roundtrip");
    init_test_db(&db_path);

    ttr()
        .args(["--db", &db_path, "--test", "start", "alice", "writing"])
        .assert()
        .success()
        .stdout(contains("Started task 'writing' for user 'alice' (id 1)"));

    ttr()
        .args(["--db", &db_path, "--test", "stop", "alice", "writing"])
        .assert()
        .success()
        .stdout(contains("Stopped task 'writing' for user 'alice'"));

    ttr()
        .args(["--db", &db_path, "--test", "users"])
        .assert()
        .success()
        .stdout(contains("alice"));

    ttr()
        .args(["--db", &db_path, "--test", "tasks"])
        .assert()
        .success()
        .stdout(contains("writing"));
}

#[test]
fn test_returning_user_keeps_the_same_id() {
    let db_path = setup_test_db("same_id");
    init_test_db(&db_path);

    ttr()
        .args(["--db", &db_path, "--test", "start", "alice", "writing"])
        .assert()
        .success()
        .stdout(contains("(id 1)"));

    ttr()
        .args(["--db", &db_path, "--test", "stop", "alice", "writing"])
        .assert()
        .success();

    // fresh process, same store: no new row for alice
    ttr()
        .args(["--db", &db_path, "--test", "start", "alice", "reading"])
        .assert()
        .success()
        .stdout(contains("(id 1)"));
}

#[test]
fn test_stop_without_open_entry_is_a_noop() {
    let db_path = setup_test_db("stop_noop");
    init_test_db(&db_path);

    ttr()
        .args(["--db", &db_path, "--test", "start", "alice", "writing"])
        .assert()
        .success();

    ttr()
        .args(["--db", &db_path, "--test", "stop", "alice", "writing"])
        .assert()
        .success();

    ttr()
        .args(["--db", &db_path, "--test", "stop", "alice", "writing"])
        .assert()
        .success()
        .stdout(contains("nothing to stop"));
}

#[test]
fn test_stop_for_unknown_user_fails() {
    let db_path = setup_test_db("unknown_user");
    init_test_db(&db_path);

    ttr()
        .args(["--db", &db_path, "--test", "stop", "bob", "writing"])
        .assert()
        .failure()
        .stderr(contains("unknown user 'bob'"));
}

#[test]
fn test_starting_an_open_task_twice_fails() {
    let db_path = setup_test_db("double_start");
    init_test_db(&db_path);

    ttr()
        .args(["--db", &db_path, "--test", "start", "alice", "writing"])
        .assert()
        .success();

    ttr()
        .args(["--db", &db_path, "--test", "start", "alice", "writing"])
        .assert()
        .failure()
        .stderr(contains("already running"));
}

#[test]
fn test_users_on_empty_store() {
    let db_path = setup_test_db("empty_users");
    init_test_db(&db_path);

    ttr()
        .args(["--db", &db_path, "--test", "users"])
        .assert()
        .success()
        .stdout(contains("No users recorded yet"));
}
