//! Wellness screen session.
//!
//! The single logical owner of the screen's state: the observable task
//! list and the water counter. The session outlives recreation of the
//! rendering layer, so the task list lives here rather than in a
//! saved-state slot; only the counter, which is small and serializable,
//! rides the [`SavedStateRegistry`] across recreation.

use thiserror::Error;

use crate::config::Config;
use crate::counter::WaterCounter;
use crate::model::Task;
use crate::sample;
use crate::saved_state::{SavedStateError, SavedStateRegistry};
use crate::tasks::event::{ListEvent, ObserverId};
use crate::tasks::intent::WellnessIntent;
use crate::tasks::list::{ListError, ObservableTaskList};

/// Saved-state slot for the counter across recreation.
const COUNTER_STATE_KEY: &str = "water_counter";

/// Errors that can occur when building a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("task list error: {0}")]
    List(#[from] ListError),

    #[error("saved state error: {0}")]
    SavedState(#[from] SavedStateError),
}

/// Owns the task list and counter for one screen session.
pub struct WellnessSession {
    tasks: ObservableTaskList,
    counter: WaterCounter,
}

impl WellnessSession {
    /// Builds a fresh session: placeholder tasks generated in one atomic
    /// batch, counter at zero.
    ///
    /// # Errors
    /// Fails if the initial batch violates id uniqueness, which a
    /// sequentially generated batch cannot. The error path exists for
    /// callers constructing sessions from their own batches via
    /// [`from_parts`].
    ///
    /// [`from_parts`]: WellnessSession::from_parts
    pub fn new(config: &Config) -> Result<Self, SessionError> {
        Self::from_parts(
            sample::placeholder_tasks(&config.tasks),
            WaterCounter::new(config.counter.daily_limit),
        )
    }

    /// Builds a session from an explicit initial batch and counter.
    pub fn from_parts(initial: Vec<Task>, counter: WaterCounter) -> Result<Self, SessionError> {
        let tasks = ObservableTaskList::new(initial)?;
        tracing::info!(task_count = tasks.len(), "session created");
        Ok(Self { tasks, counter })
    }

    /// Rebuilds a session after recreation, restoring the counter from the
    /// registry when a slot is present.
    pub fn restore(config: &Config, registry: &SavedStateRegistry) -> Result<Self, SessionError> {
        let counter = registry
            .restore::<WaterCounter>(COUNTER_STATE_KEY)?
            .unwrap_or_else(|| WaterCounter::new(config.counter.daily_limit));
        Self::from_parts(sample::placeholder_tasks(&config.tasks), counter)
    }

    /// Parks recreation-surviving state in the registry.
    pub fn save_instance_state(
        &self,
        registry: &mut SavedStateRegistry,
    ) -> Result<(), SavedStateError> {
        registry.save(COUNTER_STATE_KEY, &self.counter)
    }

    /// Applies one rendering-layer gesture.
    ///
    /// Returns whether the gesture found its target: an id no longer in
    /// the list, or a counter already at its limit, is a reported no-op
    /// rather than a fault.
    pub fn apply(&mut self, intent: WellnessIntent) -> bool {
        match intent {
            WellnessIntent::SetTaskChecked { id, checked } => self.tasks.set_checked(id, checked),
            WellnessIntent::RemoveTask { id } => self.tasks.remove(id),
            WellnessIntent::AddTask { label } => {
                let id = self.tasks.next_id();
                // Freshly allocated id, insertion cannot collide.
                self.tasks.insert(Task::new(id, label)).is_ok()
            }
            WellnessIntent::AddGlass => self.counter.add_glass(),
        }
    }

    /// Current task rows, in display order.
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    /// Owned point-in-time copy of the task rows.
    pub fn task_snapshot(&self) -> Vec<Task> {
        self.tasks.snapshot()
    }

    pub fn counter(&self) -> &WaterCounter {
        &self.counter
    }

    /// Registers a list observer; see
    /// [`ObservableTaskList::subscribe`](crate::tasks::ObservableTaskList::subscribe).
    pub fn observe_tasks(&mut self, observer: impl FnMut(&ListEvent) + 'static) -> ObserverId {
        self.tasks.subscribe(observer)
    }

    /// Removes a list observer. Returns whether it was registered.
    pub fn stop_observing(&mut self, id: ObserverId) -> bool {
        self.tasks.unsubscribe(id)
    }
}
