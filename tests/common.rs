#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtt() -> Command {
    cargo_bin_cmd!("rtasktracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtasktracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_tasks(db_path: &str) {
    // init DB (creates tables)
    rtt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rtt()
        .args(["--db", db_path, "--test", "add", "Buy", "milk"])
        .assert()
        .success();

    rtt()
        .args(["--db", db_path, "--test", "add", "Walk", "the", "dog"])
        .assert()
        .success();
}

/// Populate many tasks directly via the library DB API
pub fn populate_many_tasks(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    rtasktracker::db::initialize::init_db(&conn).expect("init db");
    drop(conn);

    let mut pool = rtasktracker::db::pool::DbPool::new(db_path).expect("open pool");
    for i in 0..n {
        rtasktracker::db::queries::create_task(&mut pool, &format!("task {}", i))
            .expect("create task");
    }
}
