//! Snapshot diffing for the live task view.

use crate::models::task::Task;

/// Positional description of how the ordered view changed between two
/// snapshots.
///
/// Index contract: `removed` holds zero-based positions in the
/// PRE-change ordering; `added` and `changed` hold positions in the
/// POST-change ordering. Consumers must apply removals before anything
/// that indexes into the new ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDelta {
    pub removed: Vec<usize>,
    pub added: Vec<usize>,
    pub changed: Vec<usize>,
}

impl TaskDelta {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.changed.is_empty()
    }
}

/// Compute the delta between two snapshots of the view.
///
/// Both slices must be sorted by id ascending (the view's invariant);
/// ids never change, so a two-pointer merge classifies every row.
pub fn diff_snapshots(old: &[Task], new: &[Task]) -> TaskDelta {
    debug_assert!(old.windows(2).all(|w| w[0].id < w[1].id));
    debug_assert!(new.windows(2).all(|w| w[0].id < w[1].id));

    let mut delta = TaskDelta::default();
    let (mut i, mut j) = (0usize, 0usize);

    while i < old.len() && j < new.len() {
        let (a, b) = (&old[i], &new[j]);
        if a.id == b.id {
            if a != b {
                delta.changed.push(j);
            }
            i += 1;
            j += 1;
        } else if a.id < b.id {
            delta.removed.push(i);
            i += 1;
        } else {
            delta.added.push(j);
            j += 1;
        }
    }
    while i < old.len() {
        delta.removed.push(i);
        i += 1;
    }
    while j < new.len() {
        delta.added.push(j);
        j += 1;
    }

    delta
}
