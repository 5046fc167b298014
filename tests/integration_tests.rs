use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_tasks, rtt, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rtt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_in_insertion_order() {
    let db_path = setup_test_db("add_list");
    init_db_with_tasks(&db_path);

    let output = rtt()
        .args(["--db", &db_path, "--test", "list"])
        .output()
        .expect("failed to list tasks");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let milk = stdout.find("Buy milk").expect("first task missing");
    let dog = stdout.find("Walk the dog").expect("second task missing");
    assert!(milk < dog, "tasks must be listed in id order");
}

#[test]
fn test_add_defaults_to_open_status() {
    let db_path = setup_test_db("add_open");

    rtt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtt()
        .args(["--db", &db_path, "--test", "add", "Buy", "milk"])
        .assert()
        .success()
        .stdout(contains("Added task #1"));

    rtt()
        .args(["--db", &db_path, "--test", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("Buy milk").and(contains("\"Open\"")));
}

#[test]
fn test_add_rejects_empty_name() {
    let db_path = setup_test_db("add_empty");

    rtt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtt()
        .args(["--db", &db_path, "--test", "add", "   "])
        .assert()
        .failure()
        .stderr(contains("must not be empty"));
}

#[test]
fn test_set_status_transition() {
    let db_path = setup_test_db("set_status");
    init_db_with_tasks(&db_path);

    rtt()
        .args(["--db", &db_path, "--test", "set", "1", "in-progress"])
        .assert()
        .success()
        .stdout(contains("In Progress"));

    rtt()
        .args(["--db", &db_path, "--test", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"InProgress\""));
}

#[test]
fn test_set_same_status_is_rejected() {
    let db_path = setup_test_db("set_same");
    init_db_with_tasks(&db_path);

    // New tasks are already open.
    rtt()
        .args(["--db", &db_path, "--test", "set", "1", "open"])
        .assert()
        .failure()
        .stderr(contains("already in status"));
}

#[test]
fn test_set_unknown_task_fails() {
    let db_path = setup_test_db("set_missing");
    init_db_with_tasks(&db_path);

    rtt()
        .args(["--db", &db_path, "--test", "set", "99", "complete"])
        .assert()
        .failure()
        .stderr(contains("No task found with id 99"));
}

#[test]
fn test_set_invalid_status_fails() {
    let db_path = setup_test_db("set_invalid");
    init_db_with_tasks(&db_path);

    rtt()
        .args(["--db", &db_path, "--test", "set", "1", "paused"])
        .assert()
        .failure()
        .stderr(contains("Invalid status"));
}

#[test]
fn test_del_removes_task() {
    let db_path = setup_test_db("del");
    init_db_with_tasks(&db_path);

    rtt()
        .args(["--db", &db_path, "--test", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rtt()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Walk the dog").and(contains("Buy milk").not()));
}

#[test]
fn test_del_prompt_can_cancel() {
    let db_path = setup_test_db("del_cancel");
    init_db_with_tasks(&db_path);

    rtt()
        .args(["--db", &db_path, "--test", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rtt()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Buy milk"));
}

#[test]
fn test_del_unknown_task_fails() {
    let db_path = setup_test_db("del_missing");
    init_db_with_tasks(&db_path);

    rtt()
        .args(["--db", &db_path, "--test", "del", "42", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No task found with id 42"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log");
    init_db_with_tasks(&db_path);

    rtt()
        .args(["--db", &db_path, "--test", "set", "2", "complete"])
        .assert()
        .success();

    rtt()
        .args(["--db", &db_path, "--test", "del", "1", "--yes"])
        .assert()
        .success();

    rtt()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("Created task 'Buy milk'")
                .and(contains("Status open -> complete"))
                .and(contains("Deleted task 'Buy milk'")),
        );
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_maint");
    init_db_with_tasks(&db_path);

    rtt()
        .args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    rtt()
        .args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total tasks").and(contains("Schema version")));

    rtt()
        .args(["--db", &db_path, "--test", "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_board_session_add_set_del() {
    let db_path = setup_test_db("board");
    init_db_with_tasks(&db_path);

    rtt()
        .args(["--db", &db_path, "--test", "board"])
        .write_stdin("add Water plants\nset 3 complete\ndel 1\nquit\n")
        .assert()
        .success()
        .stdout(contains("Water plants").and(contains("Task board")));

    // The board's mutations are committed to the store.
    rtt()
        .args(["--db", &db_path, "--test", "list", "--json"])
        .assert()
        .success()
        .stdout(
            contains("Water plants")
                .and(contains("\"Complete\""))
                .and(contains("Buy milk").not()),
        );
}

#[test]
fn test_board_reports_bad_row_and_continues() {
    let db_path = setup_test_db("board_bad_row");
    init_db_with_tasks(&db_path);

    rtt()
        .args(["--db", &db_path, "--test", "board"])
        .write_stdin("del 99\nadd Still alive\nquit\n")
        .assert()
        .success()
        .stdout(contains("Still alive"))
        .stderr(contains("Invalid row number"));
}
