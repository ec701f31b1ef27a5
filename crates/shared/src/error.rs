use serde::{Deserialize, Serialize};

/// Error body returned by the employee service on non-2xx responses. Any
/// other fields in the body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}
