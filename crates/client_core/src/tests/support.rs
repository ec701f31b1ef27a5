use std::{
    collections::VecDeque,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use shared::{
    domain::{Employee, EmployeeDraft, EmployeeId, Role},
    protocol::MutationResponse,
};
use tokio::sync::{oneshot, Mutex};

use crate::{error::RepositoryError, repository::EmployeeRepository};

pub(crate) fn employee(id: i64, role: Role, is_archive: bool) -> Employee {
    Employee {
        id: EmployeeId(id),
        name: format!("employee-{id}"),
        phone: format!("+7 (900) 000-{:04}", id),
        birthday: "01.01.1990".into(),
        role,
        is_archive,
    }
}

/// Repository returning canned results and recording writes.
pub(crate) struct TestRepository {
    roster: Mutex<Result<Vec<Employee>, RepositoryError>>,
    mutation: Mutex<Result<MutationResponse, RepositoryError>>,
    pub created: Mutex<Vec<EmployeeDraft>>,
    pub updated: Mutex<Vec<Employee>>,
    loads: AtomicUsize,
}

impl TestRepository {
    pub(crate) fn with_roster(roster: Vec<Employee>) -> Self {
        Self {
            roster: Mutex::new(Ok(roster)),
            mutation: Mutex::new(Ok(MutationResponse::ok())),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            loads: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing_load(err: RepositoryError) -> Self {
        Self {
            roster: Mutex::new(Err(err)),
            ..Self::with_roster(Vec::new())
        }
    }

    pub(crate) async fn set_roster(&self, roster: Result<Vec<Employee>, RepositoryError>) {
        *self.roster.lock().await = roster;
    }

    pub(crate) async fn set_mutation(&self, mutation: Result<MutationResponse, RepositoryError>) {
        *self.mutation.lock().await = mutation;
    }

    pub(crate) fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeRepository for TestRepository {
    async fn load_roster(&self) -> Result<Vec<Employee>, RepositoryError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.roster.lock().await.clone()
    }

    async fn create_employee(
        &self,
        employee: EmployeeDraft,
    ) -> Result<MutationResponse, RepositoryError> {
        self.created.lock().await.push(employee);
        self.mutation.lock().await.clone()
    }

    async fn update_employee(
        &self,
        employee: Employee,
    ) -> Result<MutationResponse, RepositoryError> {
        self.updated.lock().await.push(employee);
        self.mutation.lock().await.clone()
    }
}

type LoadGate = oneshot::Receiver<Result<Vec<Employee>, RepositoryError>>;

/// Repository whose loads block until the test releases them, one gate per call.
#[derive(Default)]
pub(crate) struct GatedRepository {
    gates: Mutex<VecDeque<LoadGate>>,
    taken: AtomicUsize,
}

impl GatedRepository {
    pub(crate) async fn push_gate(
        &self,
    ) -> oneshot::Sender<Result<Vec<Employee>, RepositoryError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().await.push_back(rx);
        tx
    }

    pub(crate) fn taken(&self) -> usize {
        self.taken.load(Ordering::SeqCst)
    }

    pub(crate) async fn wait_until_taken(&self, count: usize) {
        while self.taken() < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl EmployeeRepository for GatedRepository {
    async fn load_roster(&self) -> Result<Vec<Employee>, RepositoryError> {
        let gate = self.gates.lock().await.pop_front();
        self.taken.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(gate) => gate.await.unwrap_or(Err(RepositoryError::Unavailable)),
            None => Err(RepositoryError::Unavailable),
        }
    }

    async fn create_employee(
        &self,
        _employee: EmployeeDraft,
    ) -> Result<MutationResponse, RepositoryError> {
        Ok(MutationResponse::ok())
    }

    async fn update_employee(
        &self,
        _employee: Employee,
    ) -> Result<MutationResponse, RepositoryError> {
        Ok(MutationResponse::ok())
    }
}
