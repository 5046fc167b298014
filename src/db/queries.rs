//! Task store queries and transactional mutations.
//!
//! Every mutation runs inside a single transaction that also appends a
//! row to the internal `log` table: either both commit or neither does.

use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::status::Status;
use crate::models::task::Task;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Load all tasks, sorted by id so that the ordering is defined and
/// stable across change notifications.
pub fn load_tasks(conn: &Connection) -> AppResult<Vec<Task>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, status, created_at FROM tasks
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load a single task by id.
pub fn load_task(conn: &Connection, id: i64) -> AppResult<Option<Task>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, name, status, created_at FROM tasks WHERE id = ?1")?;
    let task = stmt.query_row([id], map_row).optional()?;
    Ok(task)
}

pub fn map_row(row: &Row) -> Result<Task> {
    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Task {
        id: row.get("id")?,
        name: row.get("name")?,
        status,
        created_at: row.get("created_at")?,
    })
}

/// Create a new task with the given name, default status Open.
/// Returns the stored task with its assigned id.
pub fn create_task(pool: &mut DbPool, name: &str) -> AppResult<Task> {
    if name.trim().is_empty() {
        return Err(AppError::EmptyName);
    }

    let task = Task::new(0, name.trim());

    let tx = pool.conn.transaction()?;
    tx.execute(
        "INSERT INTO tasks (name, status, created_at) VALUES (?1, ?2, ?3)",
        params![task.name, task.status.to_db_str(), task.created_at],
    )?;
    let id = tx.last_insert_rowid();
    log::ttlog(
        &tx,
        "add",
        &id.to_string(),
        &format!("Created task '{}'", task.name),
    )?;
    tx.commit()?;

    Ok(Task { id, ..task })
}

/// Move a task to a new status. The id (and therefore the task's
/// position in the ordered view) never changes.
pub fn set_status(pool: &mut DbPool, id: i64, status: Status) -> AppResult<Task> {
    let current = load_task(&pool.conn, id)?.ok_or(AppError::TaskNotFound(id))?;

    if current.status == status {
        return Err(AppError::StatusUnchanged(id, status.to_db_str().into()));
    }

    let tx = pool.conn.transaction()?;
    tx.execute(
        "UPDATE tasks SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    log::ttlog(
        &tx,
        "set",
        &id.to_string(),
        &format!(
            "Status {} -> {}",
            current.status.to_db_str(),
            status.to_db_str()
        ),
    )?;
    tx.commit()?;

    Ok(Task { status, ..current })
}

/// Delete a task by id.
pub fn delete_task(pool: &mut DbPool, id: i64) -> AppResult<Task> {
    let task = load_task(&pool.conn, id)?.ok_or(AppError::TaskNotFound(id))?;

    let tx = pool.conn.transaction()?;
    tx.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    log::ttlog(
        &tx,
        "del",
        &id.to_string(),
        &format!("Deleted task '{}'", task.name),
    )?;
    tx.commit()?;

    Ok(task)
}
