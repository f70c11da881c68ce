//! Placeholder task generation.
//!
//! Supplies the initial ordered batch a fresh session is populated from.
//! Consumed exactly once at construction; growing an already-observed
//! list goes through `insert`, which has its own notification semantics.

use crate::config::TasksConfig;
use crate::model::{Task, TaskId};

/// Synthesizes the configured number of placeholder tasks.
///
/// Ids are sequential from zero, so the batch always satisfies the
/// unique-id construction precondition.
pub fn placeholder_tasks(config: &TasksConfig) -> Vec<Task> {
    (0..config.count)
        .map(|i| Task::new(TaskId::from(i), format!("{}{i}", config.label_prefix)))
        .collect()
}
