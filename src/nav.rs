//! Single-top navigation back stack.
//!
//! Models the tab-style navigation the sample screens use: re-selecting
//! the current destination does nothing, switching destinations pops the
//! stack back to the start destination instead of piling entries up, and
//! each destination's screen state is stashed on the way out and
//! reattached when the user returns to it.

use std::collections::HashMap;

use crate::saved_state::SavedStateRegistry;

/// One live entry on the back stack: a route plus its screen state.
pub struct NavEntry {
    route: String,
    /// Per-destination state (scroll offsets and the like). Survives being
    /// popped by a single-top navigation; discarded on explicit back.
    pub state: SavedStateRegistry,
}

impl NavEntry {
    fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            state: SavedStateRegistry::new(),
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }
}

/// Route back stack with single-top semantics.
///
/// The start destination is always the bottom entry and is never popped,
/// so the stack is never empty.
pub struct NavController {
    stack: Vec<NavEntry>,
    /// State stashed for destinations popped by single-top navigation,
    /// keyed by route, reattached on the next visit.
    saved: HashMap<String, SavedStateRegistry>,
}

impl NavController {
    /// Creates a controller positioned at the start destination.
    pub fn new(start_route: impl Into<String>) -> Self {
        Self {
            stack: vec![NavEntry::new(start_route)],
            saved: HashMap::new(),
        }
    }

    pub fn start_route(&self) -> &str {
        self.stack[0].route()
    }

    /// Route currently on top of the stack.
    pub fn current(&self) -> &str {
        self.stack[self.stack.len() - 1].route()
    }

    /// Mutable access to the current entry, for screens writing their
    /// state (a renderer storing a scroll offset, say).
    pub fn current_entry_mut(&mut self) -> &mut NavEntry {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Routes from the start destination to the current one.
    pub fn routes(&self) -> Vec<&str> {
        self.stack.iter().map(NavEntry::route).collect()
    }

    /// Navigates to `route`, keeping at most one copy of a destination on
    /// top of the stack.
    ///
    /// Re-selecting the current destination is a no-op. Otherwise every
    /// entry above the start destination is popped with its state stashed,
    /// and the target is pushed with any previously stashed state
    /// reattached. Navigating to the start destination just collapses the
    /// stack; the start entry keeps its live state.
    pub fn navigate_single_top(&mut self, route: &str) {
        if self.current() == route {
            return;
        }

        let from = self.current().to_string();
        while self.stack.len() > 1 {
            if let Some(NavEntry { route, state }) = self.stack.pop() {
                self.saved.insert(route, state);
            }
        }

        if self.current() != route {
            let mut entry = NavEntry::new(route);
            if let Some(state) = self.saved.remove(route) {
                entry.state = state;
            }
            self.stack.push(entry);
        }

        tracing::info!(from = %from, to = %route, "navigated");
    }

    /// Pops the current destination, returning to the previous one.
    ///
    /// Back navigation destroys the popped entry's state; only
    /// single-top pops stash it. Returns `false` at the start destination.
    pub fn pop_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }
}
