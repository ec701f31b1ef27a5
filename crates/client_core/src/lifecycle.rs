use tracing::{info, warn};

use crate::{repository::EmployeeRepository, state::FetchStatus, store::RosterStore};

/// Reloads the roster from `repository` into `store`.
///
/// The roster is emptied as soon as loading starts and stays empty when the
/// load fails. Concurrent calls are not sequenced: whichever resolves last
/// wins, even if it carries older data. The returned status is this call's
/// own outcome, whatever a racing call has since written to the store.
pub async fn refresh_roster(
    store: &RosterStore,
    repository: &dyn EmployeeRepository,
) -> FetchStatus {
    store.begin_load();
    info!("roster: loading employees");

    match repository.load_roster().await {
        Ok(list) => {
            let count = list.len();
            store.complete_load(list);
            info!(count, "roster: employees loaded");
            FetchStatus::Success
        }
        Err(err) => {
            warn!(error = %err, "roster: failed to load employees");
            store.fail_load(Some(err.message()));
            FetchStatus::Failure
        }
    }
}

#[cfg(test)]
#[path = "tests/lifecycle_tests.rs"]
mod tests;
