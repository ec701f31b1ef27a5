use async_trait::async_trait;
use shared::{
    domain::{Employee, EmployeeDraft},
    protocol::MutationResponse,
};

use crate::error::RepositoryError;

/// Remote source of truth for the employee roster.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn load_roster(&self) -> Result<Vec<Employee>, RepositoryError>;
    async fn create_employee(
        &self,
        employee: EmployeeDraft,
    ) -> Result<MutationResponse, RepositoryError>;
    async fn update_employee(&self, employee: Employee)
        -> Result<MutationResponse, RepositoryError>;
}

/// Placeholder used before a real repository has been configured.
pub struct MissingEmployeeRepository;

#[async_trait]
impl EmployeeRepository for MissingEmployeeRepository {
    async fn load_roster(&self) -> Result<Vec<Employee>, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn create_employee(
        &self,
        _employee: EmployeeDraft,
    ) -> Result<MutationResponse, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn update_employee(
        &self,
        _employee: Employee,
    ) -> Result<MutationResponse, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }
}
