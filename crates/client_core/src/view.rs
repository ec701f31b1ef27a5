use std::sync::Arc;

use shared::domain::Employee;

use crate::{
    routes::Route,
    selector::FilteredViewSelector,
    state::{RosterFilters, RosterState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ROLE_FILTER_OPTIONS: [RoleOption; 4] = [
    RoleOption {
        value: "",
        label: "All",
    },
    RoleOption {
        value: "cook",
        label: "cook",
    },
    RoleOption {
        value: "driver",
        label: "driver",
    },
    RoleOption {
        value: "waiter",
        label: "waiter",
    },
];

/// What the roster list renders from one store snapshot.
#[derive(Debug, Clone)]
pub struct RosterView {
    /// While set the list shows a spinner instead of rows.
    pub loading: bool,
    pub rows: Arc<Vec<Employee>>,
    pub filters: RosterFilters,
    pub error: Option<String>,
}

impl RosterView {
    pub fn build(state: &RosterState, selector: &FilteredViewSelector) -> Self {
        Self {
            loading: state.is_loading(),
            rows: selector.select_state(state),
            filters: state.filters(),
            error: state.error().map(str::to_string),
        }
    }

    pub fn row_route(employee: &Employee) -> Route {
        Route::Edit(employee.id)
    }
}
