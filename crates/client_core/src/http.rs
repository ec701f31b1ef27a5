//! HTTP binding of [`EmployeeRepository`] against the employee service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Employee, EmployeeDraft},
    error::ApiError,
    protocol::MutationResponse,
};
use tracing::{debug, warn};
use url::Url;

use crate::{error::RepositoryError, repository::EmployeeRepository};

pub struct HttpEmployeeRepository {
    http: Client,
    base_url: Url,
}

impl HttpEmployeeRepository {
    pub fn new(base_url: &str) -> Result<Self, RepositoryError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, RepositoryError> {
        let http = Client::builder().timeout(timeout).build()?;
        Self::with_client(http, base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, RepositoryError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        // Url::join replaces the last path segment unless the base ends in '/'.
        let base_url = Url::parse(&format!("{trimmed}/"))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, RepositoryError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl EmployeeRepository for HttpEmployeeRepository {
    async fn load_roster(&self) -> Result<Vec<Employee>, RepositoryError> {
        let url = self.endpoint("employees")?;
        debug!(%url, "roster: GET employees");
        let res = self.http.get(url).send().await?;
        decode_json(res).await
    }

    async fn create_employee(
        &self,
        employee: EmployeeDraft,
    ) -> Result<MutationResponse, RepositoryError> {
        let url = self.endpoint("employees")?;
        debug!(%url, name = %employee.name, "roster: POST employee");
        let res = self.http.post(url).json(&employee).send().await?;
        decode_json(res).await
    }

    async fn update_employee(
        &self,
        employee: Employee,
    ) -> Result<MutationResponse, RepositoryError> {
        let url = self.endpoint(&format!("employees/{}", employee.id))?;
        debug!(%url, employee_id = employee.id.0, "roster: PUT employee");
        let res = self.http.put(url).json(&employee).send().await?;
        decode_json(res).await
    }
}

async fn decode_json<T: DeserializeOwned>(res: Response) -> Result<T, RepositoryError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json::<T>().await?);
    }

    let body = res.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiError>(&body) {
        Ok(api) => Some(api.message),
        Err(_) if body.trim().is_empty() => None,
        Err(_) => Some(body.trim().to_string()),
    };
    warn!(
        status = status.as_u16(),
        message = message.as_deref().unwrap_or(""),
        "roster: employee service returned an error"
    );
    Err(RepositoryError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod tests;
