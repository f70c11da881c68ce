//! Observable task list.
//!
//! Holds the ordered task collection for one screen session, mutates it in
//! place, and notifies registered observers of the minimal change so a
//! renderer can update only the affected rows.
//!
//! Single-writer, single-thread usage is assumed: no operation blocks and
//! no internal locking is provided. Callers that share a list across
//! threads must serialize every call at this boundary.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Task, TaskId};
use crate::tasks::event::{ListEvent, ObserverId};

type ObserverFn = Box<dyn FnMut(&ListEvent)>;

/// Errors that can occur when populating or growing a task list.
#[derive(Debug, Error)]
pub enum ListError {
    /// The id is already owned by this list, or was owned before a removal.
    /// Ids are never reused within one list instance, otherwise lookups by
    /// id would become ambiguous for observers holding older snapshots.
    #[error("duplicate task id {0}")]
    DuplicateId(TaskId),
}

/// Ordered collection of tasks with granular change notification.
///
/// Constructed from its full initial contents in one step; later mutations
/// each emit exactly one [`ListEvent`] to every registered observer, in the
/// order the mutations were applied. Construction itself emits nothing:
/// it is not a mutation against a previously-observed state.
pub struct ObservableTaskList {
    tasks: Vec<Task>,
    /// Every id this list has ever owned, including removed ones.
    seen_ids: HashSet<TaskId>,
    observers: Vec<(ObserverId, ObserverFn)>,
    next_observer_id: u64,
}

impl ObservableTaskList {
    /// Populates the list from an initial ordered batch.
    ///
    /// Visible contents equal the input, in input order. No observer
    /// notifications fire for initial population.
    ///
    /// # Errors
    /// Fails with [`ListError::DuplicateId`] if two tasks share an id,
    /// rather than producing a list with hidden collisions.
    pub fn new(initial: Vec<Task>) -> Result<Self, ListError> {
        let mut seen_ids = HashSet::with_capacity(initial.len());
        for task in &initial {
            if !seen_ids.insert(task.id) {
                return Err(ListError::DuplicateId(task.id));
            }
        }

        Ok(Self {
            tasks: initial,
            seen_ids,
            observers: Vec::new(),
            next_observer_id: 0,
        })
    }

    /// Current contents as a borrowed, order-preserving view.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Owned point-in-time copy of the current contents.
    ///
    /// Reflects all mutations applied before the call and stays valid
    /// across later ones.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read view of one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Smallest id above every id this list has ever owned.
    ///
    /// Allocating from here keeps the never-reuse invariant even when the
    /// original holder of an id has since been removed.
    pub fn next_id(&self) -> TaskId {
        self.seen_ids.iter().max().map_or(0, |max| max + 1)
    }

    /// Appends a task after initial population.
    ///
    /// # Errors
    /// Fails with [`ListError::DuplicateId`] if the id is live or retired.
    pub fn insert(&mut self, task: Task) -> Result<(), ListError> {
        if !self.seen_ids.insert(task.id) {
            return Err(ListError::DuplicateId(task.id));
        }

        let event = ListEvent::Inserted {
            id: task.id,
            index: self.tasks.len(),
        };
        tracing::debug!(id = task.id, "task inserted");
        self.tasks.push(task);
        self.notify(event);
        Ok(())
    }

    /// Removes the task with the given id if present.
    ///
    /// Relative order of the remaining tasks is preserved. Emits one
    /// `Removed` notification on success; an unknown id is a no-op
    /// reporting `false`, not a fault.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };

        self.tasks.remove(index);
        tracing::debug!(id, index, "task removed");
        self.notify(ListEvent::Removed { id, index });
        true
    }

    /// Updates one task's checked state, found by id, never by position:
    /// ids drift from positions after removals.
    ///
    /// Returns whether a matching task was found. Emits an `Updated`
    /// notification only when the stored value actually changed.
    pub fn set_checked(&mut self, id: TaskId, checked: bool) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };

        if self.tasks[index].checked == checked {
            return true;
        }

        self.tasks[index].checked = checked;
        tracing::debug!(id, checked, "task checked state changed");
        self.notify(ListEvent::Updated { id, index });
        true
    }

    /// Registers an observer invoked synchronously after each mutation.
    ///
    /// Each registered observer receives every subsequent event exactly
    /// once, in the order mutations were applied.
    pub fn subscribe(&mut self, observer: impl FnMut(&ListEvent) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a registered observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    // Linear scan: collection sizes in this domain are tens of items. An
    // id-to-position index would have to be rebuilt on every structural
    // mutation anyway, since removals shift every later position.
    fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn notify(&mut self, event: ListEvent) {
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}
