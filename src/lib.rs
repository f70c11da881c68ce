//! In-memory state holders for list-driven wellness screens.
//!
//! A rendering layer binds to these and stays dumb: it draws snapshots,
//! subscribes to granular change notifications, and feeds user gestures
//! back as intents. Nothing here blocks, suspends, or performs I/O, and
//! every holder assumes a single logical owner on a single thread of
//! control. Callers that share state across threads serialize access at
//! the component boundary.
//!
//! The pieces:
//!
//! - [`tasks`]: the observable task list, its change events, and the
//!   session that owns it
//! - [`counter`]: the bounded water counter
//! - [`saved_state`]: the registry carrying screen state across recreation
//! - [`nav`]: the single-top navigation back stack
//! - [`sample`] / [`config`]: placeholder data and its tunables

pub mod config;
pub mod counter;
pub mod logging;
pub mod model;
pub mod nav;
pub mod sample;
pub mod saved_state;
pub mod tasks;

pub use config::{Config, ConfigError, CounterConfig, TasksConfig};
pub use counter::WaterCounter;
pub use model::{Task, TaskId};
pub use nav::{NavController, NavEntry};
pub use saved_state::{SavedStateError, SavedStateRegistry};
pub use tasks::{
    ListError, ListEvent, ObservableTaskList, ObserverId, SessionError, WellnessIntent,
    WellnessSession,
};
