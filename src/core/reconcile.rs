//! Translation of a view delta into an ordered plan of structural edits.

use crate::core::diff::TaskDelta;

/// The batched structural edits needed to bring a row list in sync with
/// the view after one change notification.
///
/// The edits must be applied in a fixed order: deletions first, then
/// insertions, then in-place reloads. A deletion shifts every later
/// position, so applying them in any other order against
/// position-indexed operations corrupts indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPlan {
    /// Pre-change positions, sorted descending so each removal leaves
    /// the remaining positions valid.
    pub deletes: Vec<usize>,
    /// Post-change positions, sorted ascending.
    pub inserts: Vec<usize>,
    /// Post-change positions, sorted ascending.
    pub reloads: Vec<usize>,
}

impl EditPlan {
    /// Build the plan for a delta. Pure; independently testable.
    pub fn from_delta(delta: &TaskDelta) -> Self {
        let mut deletes = delta.removed.clone();
        deletes.sort_unstable_by(|a, b| b.cmp(a));

        let mut inserts = delta.added.clone();
        inserts.sort_unstable();

        let mut reloads = delta.changed.clone();
        reloads.sort_unstable();

        Self {
            deletes,
            inserts,
            reloads,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty() && self.inserts.is_empty() && self.reloads.is_empty()
    }

    /// Total number of structural edits in the plan.
    pub fn len(&self) -> usize {
        self.deletes.len() + self.inserts.len() + self.reloads.len()
    }
}
