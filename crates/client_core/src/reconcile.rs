//! Form submission and edit-target resolution.

use shared::{
    domain::{Employee, EmployeeId},
    validation::{EmployeeForm, ValidationError},
};
use tracing::{info, warn};

use crate::{
    effects::{Notification, UiEffect},
    lifecycle::refresh_roster,
    repository::EmployeeRepository,
    routes::Route,
    state::FetchStatus,
    store::RosterStore,
};

pub const SAVED_MESSAGE: &str = "Changes saved";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save changes";
pub const NOT_FOUND_MESSAGE: &str = "Employee not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EmployeeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Written and reloaded; `status` is the state the reload ended in.
    Saved { status: FetchStatus },
    /// Rejected locally; shown next to the fields.
    Invalid(Vec<ValidationError>),
    /// The repository refused or could not be reached. The store is untouched.
    Failed { message: String },
}

impl SubmitOutcome {
    pub fn effects(&self) -> Vec<UiEffect> {
        match self {
            SubmitOutcome::Saved { .. } => vec![
                UiEffect::Navigate {
                    route: Route::Roster,
                    replace: false,
                },
                UiEffect::Notify(Notification::success(SAVED_MESSAGE)),
            ],
            SubmitOutcome::Invalid(_) => Vec::new(),
            SubmitOutcome::Failed { message } => {
                vec![UiEffect::Notify(Notification::error(message.clone()))]
            }
        }
    }
}

pub async fn submit_employee(
    store: &RosterStore,
    repository: &dyn EmployeeRepository,
    form: &EmployeeForm,
    mode: FormMode,
) -> SubmitOutcome {
    let result = match mode {
        FormMode::Create => {
            let draft = match form.validate() {
                Ok(draft) => draft,
                Err(errors) => return SubmitOutcome::Invalid(errors),
            };
            info!(name = %draft.name, "roster: creating employee");
            repository.create_employee(draft).await
        }
        FormMode::Edit(id) => {
            let employee = match form.validate_with_id(id) {
                Ok(employee) => employee,
                Err(errors) => return SubmitOutcome::Invalid(errors),
            };
            info!(employee_id = id.0, "roster: updating employee");
            repository.update_employee(employee).await
        }
    };

    let failure = match result {
        Ok(response) if response.success => None,
        Ok(response) => Some(response.error),
        Err(err) => Some(Some(err.message())),
    };
    if let Some(message) = failure {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| SAVE_FAILED_MESSAGE.to_string());
        warn!(?mode, message = %message, "roster: save rejected");
        return SubmitOutcome::Failed { message };
    }

    let status = refresh_roster(store, repository).await;
    SubmitOutcome::Saved { status }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Found(Employee),
    NotFound(EmployeeId),
}

impl EditTarget {
    pub fn effects(&self) -> Vec<UiEffect> {
        match self {
            EditTarget::Found(_) => Vec::new(),
            EditTarget::NotFound(_) => vec![
                UiEffect::Notify(Notification::error(NOT_FOUND_MESSAGE)),
                UiEffect::Navigate {
                    route: Route::Roster,
                    replace: true,
                },
            ],
        }
    }

    /// Initial form values for the edit view.
    pub fn form(&self) -> Option<EmployeeForm> {
        match self {
            EditTarget::Found(employee) => Some(EmployeeForm::from(employee)),
            EditTarget::NotFound(_) => None,
        }
    }
}

/// Looks `id` up in the currently loaded roster; never mutates the store.
pub fn resolve_edit_target(store: &RosterStore, id: EmployeeId) -> EditTarget {
    match store.find(id) {
        Some(employee) => EditTarget::Found(employee),
        None => {
            warn!(employee_id = id.0, "roster: edit target not in loaded roster");
            EditTarget::NotFound(id)
        }
    }
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
