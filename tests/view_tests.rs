//! Tests for the live view and the background change subscription,
//! running against real SQLite files in the temp dir.

use rtasktracker::core::view::{ChangeEvent, LiveView};
use rtasktracker::core::watch::subscribe;
use rtasktracker::db::initialize::init_db;
use rtasktracker::db::pool::DbPool;
use rtasktracker::db::queries::{create_task, delete_task, load_tasks, set_status};
use rtasktracker::models::status::Status;
use rtasktracker::ui::list::VisualList;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtasktracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    init_db(&conn).expect("init db");
    db_path
}

#[test]
fn test_first_refresh_delivers_initial_snapshot() {
    let db_path = setup_test_db("view_initial");
    let mut pool = DbPool::new(&db_path).expect("open pool");
    create_task(&mut pool, "one").expect("create");
    create_task(&mut pool, "two").expect("create");

    let mut view = LiveView::open(&db_path).expect("open view");
    match view.refresh() {
        Some(ChangeEvent::Initial(tasks)) => {
            assert_eq!(tasks.len(), 2);
            assert_eq!(tasks[0].name, "one");
        }
        other => panic!("expected Initial, got {:?}", other),
    }

    // Nothing changed since: no notification.
    assert!(view.refresh().is_none());
}

#[test]
fn test_snapshot_stays_sorted_by_id_across_mutations() {
    let db_path = setup_test_db("view_sorted");
    let mut pool = DbPool::new(&db_path).expect("open pool");
    let mut view = LiveView::open(&db_path).expect("open view");
    view.refresh();

    for i in 0..10 {
        create_task(&mut pool, &format!("task {}", i)).expect("create");
    }
    let t = load_tasks(&pool.conn).expect("load");
    delete_task(&mut pool, t[3].id).expect("delete");
    delete_task(&mut pool, t[7].id).expect("delete");
    set_status(&mut pool, t[0].id, Status::Complete).expect("set");

    view.refresh();
    let snap = view.snapshot();
    assert_eq!(snap.len(), 8);
    assert!(snap.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn test_create_appears_as_single_added_row() {
    let db_path = setup_test_db("view_create");
    let mut pool = DbPool::new(&db_path).expect("open pool");
    let mut view = LiveView::open(&db_path).expect("open view");
    let mut list = VisualList::new();
    list.apply_event(&view.refresh().expect("initial")).expect("apply");
    assert_eq!(list.len(), 0);

    create_task(&mut pool, "Buy milk").expect("create");

    let event = view.refresh().expect("expected a notification");
    match &event {
        ChangeEvent::Delta { delta, .. } => {
            assert_eq!(delta.added.len(), 1);
            assert!(delta.removed.is_empty());
            assert!(delta.changed.is_empty());
        }
        other => panic!("expected Delta, got {:?}", other),
    }
    list.apply_event(&event).expect("apply");

    assert_eq!(list.len(), 1);
    assert_eq!(list.rows()[0].name, "Buy milk");
    // New tasks are open: no accessory.
    assert_eq!(list.rows()[0].accessory, "");
}

#[test]
fn test_status_change_touches_only_that_row() {
    let db_path = setup_test_db("view_status");
    let mut pool = DbPool::new(&db_path).expect("open pool");
    for name in ["a", "b", "c"] {
        create_task(&mut pool, name).expect("create");
    }

    let mut view = LiveView::open(&db_path).expect("open view");
    let mut list = VisualList::new();
    list.apply_event(&view.refresh().expect("initial")).expect("apply");
    let before: Vec<String> = list.rows().iter().map(|r| r.name.clone()).collect();

    let target = view.snapshot()[1].id;
    set_status(&mut pool, target, Status::InProgress).expect("set");

    let event = view.refresh().expect("expected a notification");
    match &event {
        ChangeEvent::Delta { delta, .. } => {
            assert_eq!(delta.changed, vec![1]);
            assert!(delta.added.is_empty());
            assert!(delta.removed.is_empty());
        }
        other => panic!("expected Delta, got {:?}", other),
    }
    list.apply_event(&event).expect("apply");

    // Count and order unchanged; only row 1's accessory differs.
    let after: Vec<String> = list.rows().iter().map(|r| r.name.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(list.rows()[0].accessory, "");
    assert_eq!(list.rows()[1].accessory, "In Progress");
    assert_eq!(list.rows()[2].accessory, "");
}

#[test]
fn test_subscription_delivers_external_changes() {
    let db_path = setup_test_db("watch_delivery");

    let (subscription, events) =
        subscribe(&db_path, Duration::from_millis(50)).expect("subscribe");

    // First notification is always the initial snapshot.
    match events.recv_timeout(Duration::from_secs(5)) {
        Ok(ChangeEvent::Initial(tasks)) => assert!(tasks.is_empty()),
        other => panic!("expected Initial, got {:?}", other),
    }

    // Commit from a different connection; the worker must pick it up.
    let mut pool = DbPool::new(&db_path).expect("open pool");
    create_task(&mut pool, "from outside").expect("create");

    match events.recv_timeout(Duration::from_secs(5)) {
        Ok(ChangeEvent::Delta { tasks, delta }) => {
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].name, "from outside");
            assert_eq!(delta.added, vec![0]);
        }
        other => panic!("expected Delta, got {:?}", other),
    }

    drop(subscription);
}

#[test]
fn test_dropped_subscription_delivers_nothing_further() {
    let db_path = setup_test_db("watch_release");

    let (subscription, events) =
        subscribe(&db_path, Duration::from_millis(50)).expect("subscribe");
    match events.recv_timeout(Duration::from_secs(5)) {
        Ok(ChangeEvent::Initial(_)) => {}
        other => panic!("expected Initial, got {:?}", other),
    }

    // Dropping joins the worker; its sender goes away with it.
    drop(subscription);

    // A mutation after release must not produce a notification.
    let mut pool = DbPool::new(&db_path).expect("open pool");
    create_task(&mut pool, "after release").expect("create");

    match events.try_recv() {
        Err(TryRecvError::Disconnected) => {}
        other => panic!("expected disconnected channel, got {:?}", other),
    }

    // And it stays disconnected.
    match events.recv_timeout(Duration::from_millis(200)) {
        Err(RecvTimeoutError::Disconnected) => {}
        other => panic!("expected disconnected channel, got {:?}", other),
    }
}
