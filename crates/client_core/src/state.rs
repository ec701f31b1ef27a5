//! Roster state and the pure transitions applied to it by the store.

use std::{collections::HashSet, sync::Arc};

use shared::domain::{Employee, EmployeeId, Role, UnknownRole};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Active list filters. `role == None` means no role constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterFilters {
    pub role: Option<Role>,
    pub is_archive: bool,
}

impl RosterFilters {
    pub fn matches(&self, employee: &Employee) -> bool {
        let role_match = self.role.map_or(true, |role| employee.role == role);
        role_match && employee.is_archive == self.is_archive
    }

    /// Value as exposed to the role selector, `""` for "all".
    pub fn role_value(&self) -> &'static str {
        self.role.map_or("", Role::as_str)
    }

    pub fn parse_role(value: &str) -> Result<Option<Role>, UnknownRole> {
        match value {
            "" => Ok(None),
            other => other.parse().map(Some),
        }
    }

    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(is_archive) = patch.is_archive {
            self.is_archive = is_archive;
        }
    }
}

/// Partial filter update; `None` fields leave the current value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub role: Option<Option<Role>>,
    pub is_archive: Option<bool>,
}

impl FilterPatch {
    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_archive(mut self, is_archive: bool) -> Self {
        self.is_archive = Some(is_archive);
        self
    }
}

/// Notification published after a store command has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterChange {
    Replaced { count: usize },
    Upserted { employee_id: EmployeeId },
    FiltersChanged(RosterFilters),
    LoadStarted,
    LoadCompleted { count: usize },
    LoadFailed { error: Option<String> },
}

#[derive(Debug, Clone, Default)]
pub struct RosterState {
    employees: Arc<Vec<Employee>>,
    is_loading: bool,
    error: Option<String>,
    filters: RosterFilters,
    loaded: bool,
    failed: bool,
}

impl RosterState {
    /// Current roster. A new `Arc` is installed on every change, so pointer
    /// identity tells whether the roster moved.
    pub fn employees(&self) -> &Arc<Vec<Employee>> {
        &self.employees
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filters(&self) -> RosterFilters {
        self.filters
    }

    pub fn status(&self) -> FetchStatus {
        if self.is_loading {
            FetchStatus::Loading
        } else if self.failed {
            FetchStatus::Failure
        } else if self.loaded {
            FetchStatus::Success
        } else {
            FetchStatus::Idle
        }
    }

    pub fn find(&self, employee_id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == employee_id)
    }

    pub(crate) fn replace_all(&mut self, list: Vec<Employee>) -> RosterChange {
        self.employees = Arc::new(dedup_by_id(list));
        RosterChange::Replaced {
            count: self.employees.len(),
        }
    }

    pub(crate) fn upsert_one(&mut self, employee: Employee) -> Option<RosterChange> {
        let index = self.employees.iter().position(|e| e.id == employee.id)?;
        let employee_id = employee.id;
        let mut next = Vec::clone(&self.employees);
        next[index] = employee;
        self.employees = Arc::new(next);
        Some(RosterChange::Upserted { employee_id })
    }

    pub(crate) fn set_filters(&mut self, patch: FilterPatch) -> RosterChange {
        self.filters.merge(patch);
        RosterChange::FiltersChanged(self.filters)
    }

    pub(crate) fn begin_load(&mut self) -> RosterChange {
        self.is_loading = true;
        self.employees = Arc::new(Vec::new());
        self.error = None;
        self.loaded = false;
        self.failed = false;
        RosterChange::LoadStarted
    }

    pub(crate) fn complete_load(&mut self, list: Vec<Employee>) -> RosterChange {
        self.employees = Arc::new(dedup_by_id(list));
        self.is_loading = false;
        self.loaded = true;
        self.failed = false;
        RosterChange::LoadCompleted {
            count: self.employees.len(),
        }
    }

    pub(crate) fn fail_load(&mut self, message: Option<String>) -> RosterChange {
        self.is_loading = false;
        self.loaded = false;
        self.failed = true;
        self.error = message.clone();
        RosterChange::LoadFailed { error: message }
    }
}

fn dedup_by_id(list: Vec<Employee>) -> Vec<Employee> {
    let received = list.len();
    let mut seen = HashSet::with_capacity(received);
    let unique: Vec<Employee> = list.into_iter().filter(|e| seen.insert(e.id)).collect();
    if unique.len() != received {
        warn!(
            received,
            kept = unique.len(),
            "roster: dropped employees with duplicate ids"
        );
    }
    unique
}
