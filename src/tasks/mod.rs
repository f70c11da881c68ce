//! Task-list state management.
//!
//! The heart of the crate: an ordered, identity-keyed task collection that
//! notifies observers of each mutation, and the session that owns it.
//!
//! ```text
//! gesture ──→ WellnessIntent ──→ WellnessSession ──→ ObservableTaskList
//!    ↑                                                      │
//!    └───────────── renderer ←── ListEvent ─────────────────┘
//! ```

pub mod event;
pub mod intent;
pub mod list;
pub mod session;

pub use event::{ListEvent, ObserverId};
pub use intent::WellnessIntent;
pub use list::{ListError, ObservableTaskList};
pub use session::{SessionError, WellnessSession};
