use thiserror::Error;

/// Failure reported by an [`EmployeeRepository`](crate::repository::EmployeeRepository).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Transport(String),
    #[error("employee service responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("malformed response from employee service: {0}")]
    Decode(String),
    #[error("invalid employee service url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("employee repository is unavailable")]
    Unavailable,
}

impl RepositoryError {
    /// Message surfaced to the operator. A status error without a body
    /// falls back to naming the status.
    pub fn message(&self) -> String {
        match self {
            RepositoryError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RepositoryError::Status {
                status: status.as_u16(),
                message: None,
            }
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_is_passed_through_verbatim() {
        let err = RepositoryError::Transport("Network error".into());
        assert_eq!(err.message(), "Network error");
    }

    #[test]
    fn status_without_body_names_the_status() {
        let err = RepositoryError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.message(), "employee service responded with status 502");

        let with_body = RepositoryError::Status {
            status: 409,
            message: Some("Phone already in use".into()),
        };
        assert_eq!(with_body.message(), "Phone already in use");
    }
}
