//! Live ordered view over the task store.
//!
//! The view holds the last snapshot it delivered and, on every refresh,
//! reloads the store and describes what changed. It never mutates the
//! store; all writes go through `db::queries`.

use crate::core::diff::{self, TaskDelta};
use crate::db::queries::load_tasks;
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use rusqlite::Connection;
use std::path::Path;

/// One change notification from the live view.
#[derive(Debug, Clone)]
pub enum ChangeEvent {
    /// First load completed; the renderer must fully (re)populate.
    Initial(Vec<Task>),
    /// The view changed. Carries the post-change snapshot together with
    /// the positional delta against the previous one.
    Delta {
        tasks: Vec<Task>,
        delta: TaskDelta,
    },
    /// The underlying store failed. Recoverable: consumers surface it
    /// and tear the screen down cleanly instead of aborting.
    Failed(String),
}

pub struct LiveView {
    conn: Connection,
    snapshot: Option<Vec<Task>>,
}

impl LiveView {
    /// Open a read connection on the store. The view starts empty; the
    /// first `refresh` delivers `Initial`.
    pub fn open(db_path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(db_path))?;
        Ok(Self {
            conn,
            snapshot: None,
        })
    }

    /// The last delivered snapshot, always sorted by id.
    pub fn snapshot(&self) -> &[Task] {
        self.snapshot.as_deref().unwrap_or(&[])
    }

    /// Reload the store and report what changed since the last refresh.
    ///
    /// Returns `None` when nothing changed. A store failure is reported
    /// as `ChangeEvent::Failed`; the previous snapshot is kept so the
    /// renderer stays consistent with the last good state.
    pub fn refresh(&mut self) -> Option<ChangeEvent> {
        let tasks = match load_tasks(&self.conn) {
            Ok(tasks) => tasks,
            Err(e) => return Some(ChangeEvent::Failed(e.to_string())),
        };

        match &self.snapshot {
            None => {
                self.snapshot = Some(tasks.clone());
                Some(ChangeEvent::Initial(tasks))
            }
            Some(old) => {
                let delta = diff::diff_snapshots(old, &tasks);
                if delta.is_empty() {
                    return None;
                }
                self.snapshot = Some(tasks.clone());
                Some(ChangeEvent::Delta { tasks, delta })
            }
        }
    }

    /// SQLite's commit counter for this connection. Changes whenever a
    /// different connection commits, which is what the watcher polls to
    /// detect external writes.
    pub fn data_version(&self) -> AppResult<i64> {
        let v: i64 = self
            .conn
            .query_row("PRAGMA data_version;", [], |row| row.get(0))?;
        Ok(v)
    }
}

impl ChangeEvent {
    /// Render the failure variant as a typed error; `Ok` otherwise.
    pub fn check(&self) -> AppResult<()> {
        match self {
            ChangeEvent::Failed(msg) => Err(AppError::Store(msg.clone())),
            _ => Ok(()),
        }
    }
}
