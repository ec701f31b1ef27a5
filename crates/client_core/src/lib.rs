//! Client-side synchronization of the employee roster: the store, its fetch
//! lifecycle, the filtered list view, and reconciliation of form edits.

use std::sync::Arc;

use shared::{
    domain::{Employee, EmployeeId},
    validation::EmployeeForm,
};
use tracing::debug;

pub mod effects;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod reconcile;
pub mod repository;
pub mod routes;
pub mod selector;
pub mod state;
pub mod store;
pub mod view;

pub use effects::{apply_effects, EffectSink, Notification, NotificationLevel, UiEffect};
pub use error::RepositoryError;
pub use http::HttpEmployeeRepository;
pub use reconcile::{EditTarget, FormMode, SubmitOutcome};
pub use repository::{EmployeeRepository, MissingEmployeeRepository};
pub use routes::{Route, RouteError};
pub use selector::{select_filtered, FilteredViewSelector};
pub use state::{FetchStatus, FilterPatch, RosterChange, RosterFilters, RosterState};
pub use store::RosterStore;
pub use view::RosterView;

/// What a route resolves to once it is opened.
#[derive(Debug, Clone)]
pub enum Screen {
    Roster(RosterView),
    Form { mode: FormMode, form: EmployeeForm },
    /// The route could not be shown; apply the effects to leave it.
    Redirect(Vec<UiEffect>),
}

/// One operator session: the store plus the collaborators that feed it.
///
/// Constructed once and handed to whatever presents the roster.
pub struct RosterSession {
    store: Arc<RosterStore>,
    repository: Arc<dyn EmployeeRepository>,
    selector: FilteredViewSelector,
}

impl RosterSession {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self::with_store(Arc::new(RosterStore::new()), repository)
    }

    pub fn with_store(store: Arc<RosterStore>, repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            store,
            repository,
            selector: FilteredViewSelector::new(),
        }
    }

    pub fn store(&self) -> &Arc<RosterStore> {
        &self.store
    }

    pub async fn refresh_roster(&self) -> FetchStatus {
        lifecycle::refresh_roster(&self.store, self.repository.as_ref()).await
    }

    pub fn set_filters(&self, patch: FilterPatch) {
        self.store.set_filters(patch);
    }

    pub fn filtered(&self) -> Arc<Vec<Employee>> {
        self.selector.select_state(&self.store.snapshot())
    }

    pub fn view(&self) -> RosterView {
        RosterView::build(&self.store.snapshot(), &self.selector)
    }

    pub fn resolve_edit_target(&self, id: EmployeeId) -> EditTarget {
        reconcile::resolve_edit_target(&self.store, id)
    }

    pub async fn submit(&self, form: &EmployeeForm, mode: FormMode) -> SubmitOutcome {
        reconcile::submit_employee(&self.store, self.repository.as_ref(), form, mode).await
    }

    /// Mounts the view behind `route`. Opening the roster reloads it.
    pub async fn open(&self, route: Route) -> Screen {
        debug!(route = %route, "ui: opening route");
        let Some(mode) = route.form_mode() else {
            self.refresh_roster().await;
            return Screen::Roster(self.view());
        };
        let form = match mode {
            FormMode::Create => EmployeeForm::default(),
            FormMode::Edit(id) => {
                let target = self.resolve_edit_target(id);
                match target.form() {
                    Some(form) => form,
                    None => return Screen::Redirect(target.effects()),
                }
            }
        };
        Screen::Form { mode, form }
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
