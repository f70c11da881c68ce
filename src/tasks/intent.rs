use crate::model::TaskId;

/// Rendering-layer gestures against one wellness screen session.
///
/// The renderer never mutates state directly; it hands one of these to
/// [`WellnessSession::apply`](crate::tasks::WellnessSession::apply) and
/// redraws from snapshots and change notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum WellnessIntent {
    /// Checkbox change on one task row.
    SetTaskChecked { id: TaskId, checked: bool },
    /// Close button on one task row.
    RemoveTask { id: TaskId },
    /// Submit of a new task label.
    AddTask { label: String },
    /// The "add one glass" button on the water counter.
    AddGlass,
}
