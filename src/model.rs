use serde::{Deserialize, Serialize};

/// Stable identifier for a task within one list instance.
///
/// Ids correlate a rendered row with a task across mutations regardless of
/// position, and are never reused after a removal.
pub type TaskId = u64;

/// A single task row: identity, display label, completion state.
///
/// `id` and `label` are fixed at creation; `checked` changes only through
/// the owning list's operations. Accessors on the list hand out copies or
/// immutable views, never a mutable alias into its storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub label: String,
    pub checked: bool,
}

impl Task {
    /// Creates an unchecked task.
    pub fn new(id: TaskId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            checked: false,
        }
    }
}
