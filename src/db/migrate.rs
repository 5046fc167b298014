//! Schema migration engine.
//!
//! Migrations are keyed on `PRAGMA user_version` and applied in order
//! inside a transaction each, so a half-applied schema can never be
//! observed by the rest of the application.

use crate::ui::messages::success;
use rusqlite::Connection;

use crate::errors::{AppError, AppResult};

/// Current schema version. Bump together with a new `migrate_to_vN`.
const SCHEMA_VERSION: i64 = 1;

fn user_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(v)
}

fn set_user_version(conn: &Connection, v: i64) -> AppResult<()> {
    // PRAGMA does not accept bound parameters.
    conn.execute_batch(&format!("PRAGMA user_version = {v};"))?;
    Ok(())
}

/// v1: `tasks` table (the record store) and the internal `log` table.
fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        BEGIN;

        CREATE TABLE IF NOT EXISTS tasks (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            status     TEXT NOT NULL DEFAULT 'open'
                       CHECK(status IN ('open','in_progress','complete')),
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );

        COMMIT;
        "#,
    )?;
    Ok(())
}

/// Run all migrations newer than the database's recorded version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let mut version = user_version(conn)?;

    if version > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {} is newer than this binary supports ({})",
            version, SCHEMA_VERSION
        )));
    }

    while version < SCHEMA_VERSION {
        let next = version + 1;
        match next {
            1 => migrate_to_v1(conn)?,
            _ => {
                return Err(AppError::Migration(format!(
                    "no migration registered for version {}",
                    next
                )));
            }
        }
        set_user_version(conn, next)?;
        success(format!("Applied schema migration v{}.", next));
        version = next;
    }

    Ok(())
}
