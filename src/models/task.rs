use super::status::Status;
use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,            // ⇔ tasks.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub name: String,       // ⇔ tasks.name (TEXT NOT NULL)
    pub status: Status,     // ⇔ tasks.status ('open' | 'in_progress' | 'complete')
    pub created_at: String, // ⇔ tasks.created_at (TEXT, ISO8601)
}

impl Task {
    /// Constructor for tasks created from the CLI.
    /// - New tasks always start in the Open status
    /// - `created_at` is stamped with now() in ISO8601
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            status: Status::Open,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
