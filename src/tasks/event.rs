use crate::model::TaskId;

/// Handle for a registered observer, returned by
/// [`subscribe`](crate::tasks::ObservableTaskList::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// A single mutation applied to a previously-observed list state.
///
/// Every event carries the affected task's stable id plus the position the
/// mutation touched, so a renderer can update exactly that row instead of
/// diffing the whole collection. Initial population is construction, not a
/// mutation, and emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// A task was appended at `index`.
    Inserted { id: TaskId, index: usize },
    /// The task formerly at `index` was removed.
    Removed { id: TaskId, index: usize },
    /// The task at `index` changed its checked state.
    Updated { id: TaskId, index: usize },
}
