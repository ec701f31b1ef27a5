//! Filtered view of the roster consumed by the list.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, PoisonError,
};

use shared::domain::Employee;

use crate::state::{RosterFilters, RosterState};

/// Employees matching `filters`, in roster order.
pub fn select_filtered(employees: &[Employee], filters: &RosterFilters) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| filters.matches(employee))
        .cloned()
        .collect()
}

struct CachedView {
    // Held so the pointer cannot be reused by a later allocation.
    employees: Arc<Vec<Employee>>,
    filters: RosterFilters,
    view: Arc<Vec<Employee>>,
}

/// Memoized [`select_filtered`], keyed on roster identity and filter value.
#[derive(Default)]
pub struct FilteredViewSelector {
    cache: Mutex<Option<CachedView>>,
    recomputations: AtomicU64,
}

impl FilteredViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(
        &self,
        employees: &Arc<Vec<Employee>>,
        filters: &RosterFilters,
    ) -> Arc<Vec<Employee>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.as_ref() {
            if Arc::ptr_eq(&cached.employees, employees) && cached.filters == *filters {
                return Arc::clone(&cached.view);
            }
        }

        let view = Arc::new(select_filtered(employees, filters));
        self.recomputations.fetch_add(1, Ordering::Relaxed);
        *cache = Some(CachedView {
            employees: Arc::clone(employees),
            filters: *filters,
            view: Arc::clone(&view),
        });
        view
    }

    pub fn select_state(&self, state: &RosterState) -> Arc<Vec<Employee>> {
        self.select(state.employees(), &state.filters())
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "tests/selector_tests.rs"]
mod tests;
