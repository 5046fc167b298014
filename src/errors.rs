//! Unified application error type.
//! All modules (db, core, cli, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    /// The live view's backing store reported a failure notification.
    /// Surfaced to the caller instead of aborting the process.
    #[error("Store failure: {0}")]
    Store(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid task id: {0}")]
    InvalidTaskId(String),

    #[error("Invalid row number: {0}")]
    InvalidRow(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No task found with id {0}")]
    TaskNotFound(i64),

    #[error("Task {0} is already in status '{1}'")]
    StatusUnchanged(i64, String),

    #[error("Task name must not be empty")]
    EmptyName,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
