//! Cached row list and terminal rendering for the task view.
//!
//! `VisualList` is the renderer side of the reconciler: it holds the
//! rows currently displayed and applies each change notification as one
//! batch of structural edits, keeping row *i* congruent with element
//! *i* of the live view.

use crate::core::reconcile::EditPlan;
use crate::core::view::ChangeEvent;
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use unicode_width::UnicodeWidthStr;

/// What one displayed row shows: the task name on the left and a
/// status-derived accessory on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub accessory: String,
}

impl Row {
    fn bind(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            accessory: task.status.accessory().to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct VisualList {
    rows: Vec<Row>,
}

impl VisualList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Fully repopulate from a snapshot (the `Initial` notification).
    pub fn populate(&mut self, tasks: &[Task]) {
        self.rows = tasks.iter().map(Row::bind).collect();
    }

    /// Apply one batch of structural edits.
    ///
    /// Deletions first (descending pre-change positions), then
    /// insertions (ascending post-change positions), then reloads.
    /// Content for insertions and reloads is bound from the post-change
    /// snapshot at the edit's position.
    pub fn apply(&mut self, plan: &EditPlan, tasks: &[Task]) {
        for &pos in &plan.deletes {
            self.rows.remove(pos);
        }
        for &pos in &plan.inserts {
            self.rows.insert(pos, Row::bind(&tasks[pos]));
        }
        for &pos in &plan.reloads {
            self.rows[pos] = Row::bind(&tasks[pos]);
        }
        debug_assert_eq!(self.rows.len(), tasks.len());
    }

    /// Consume one change notification from the live view.
    pub fn apply_event(&mut self, event: &ChangeEvent) -> AppResult<()> {
        match event {
            ChangeEvent::Initial(tasks) => {
                self.populate(tasks);
                Ok(())
            }
            ChangeEvent::Delta { tasks, delta } => {
                self.apply(&EditPlan::from_delta(delta), tasks);
                Ok(())
            }
            ChangeEvent::Failed(msg) => Err(AppError::Store(msg.clone())),
        }
    }

    /// Render the list as a plain table with 1-based row numbers.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "No tasks.\n".to_string();
        }

        let name_width = self
            .rows
            .iter()
            .map(|r| r.name.width())
            .chain(std::iter::once("NAME".width()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!("{:>4}  {}  STATUS\n", "#", pad("NAME", name_width)));
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&format!(
                "{:>4}  {}  {}\n",
                i + 1,
                pad(&row.name, name_width),
                row.accessory
            ));
        }
        out
    }
}

/// Pad to a display width, not a byte or char count.
fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    let fill = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(fill))
}
