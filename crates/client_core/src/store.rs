//! Session-wide roster store: the only owner of [`RosterState`].

use std::sync::{PoisonError, RwLock};

use shared::domain::{Employee, EmployeeId};
use tokio::sync::broadcast;
use tracing::debug;

use crate::state::{FilterPatch, RosterChange, RosterState};

const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// Every command applies fully under the write lock, and its change
/// notification is published before the lock is released. Readers never
/// observe a partial update, and subscribers receive changes in the order
/// they were applied.
pub struct RosterStore {
    state: RwLock<RosterState>,
    changes: broadcast::Sender<RosterChange>,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(RosterState::default()),
            changes,
        }
    }

    pub fn snapshot(&self) -> RosterState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn find(&self, employee_id: EmployeeId) -> Option<Employee> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .find(employee_id)
            .cloned()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RosterChange> {
        self.changes.subscribe()
    }

    pub fn replace_all(&self, list: Vec<Employee>) {
        self.apply(|state| Some(state.replace_all(list)));
    }

    /// Replaces the entry with the same id in place. Unknown ids are ignored;
    /// new employees only arrive through a full reload.
    pub fn upsert_one(&self, employee: Employee) {
        self.apply(|state| state.upsert_one(employee));
    }

    pub fn set_filters(&self, patch: FilterPatch) {
        self.apply(|state| Some(state.set_filters(patch)));
    }

    pub fn begin_load(&self) {
        self.apply(|state| Some(state.begin_load()));
    }

    pub fn complete_load(&self, list: Vec<Employee>) {
        self.apply(|state| Some(state.complete_load(list)));
    }

    pub fn fail_load(&self, message: Option<String>) {
        self.apply(|state| Some(state.fail_load(message)));
    }

    fn apply<F>(&self, command: F)
    where
        F: FnOnce(&mut RosterState) -> Option<RosterChange>,
    {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let Some(change) = command(&mut guard) else {
            debug!("roster: command left state unchanged");
            return;
        };
        debug!(?change, "roster: state changed");
        // Errors only when nobody is subscribed.
        let _ = self.changes.send(change);
        drop(guard);
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
