use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Status {
    Open,
    InProgress,
    Complete,
}

pub const ALL_STATUSES: [Status; 3] = [Status::Open, Status::InProgress, Status::Complete];

impl Status {
    /// Parse a user-supplied status name (CLI argument).
    pub fn from_cli_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(Self::Open),
            "in-progress" | "in_progress" | "progress" => Some(Self::InProgress),
            "complete" | "done" => Some(Self::Complete),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Complete => "complete",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Status::Open),
            "in_progress" => Some(Status::InProgress),
            "complete" => Some(Status::Complete),
            _ => None,
        }
    }

    /// Human-readable label used in table headers and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Complete => "Complete",
        }
    }

    /// Accessory text shown next to a row: nothing for an open task,
    /// a progress label or a check mark otherwise.
    pub fn accessory(&self) -> &'static str {
        match self {
            Status::Open => "",
            Status::InProgress => "In Progress",
            Status::Complete => "✓",
        }
    }

    /// The statuses a task can transition to, i.e. every status except
    /// the one it is currently in.
    pub fn transitions(&self) -> Vec<Status> {
        ALL_STATUSES.iter().copied().filter(|s| s != self).collect()
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Status::Open)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Status::Complete)
    }
}
