use std::{fmt, str::FromStr};

use shared::domain::EmployeeId;
use thiserror::Error;

use crate::reconcile::FormMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: roster list with filters.
    Roster,
    /// `/add`
    Add,
    /// `/edit/{id}`
    Edit(EmployeeId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Roster => "/".to_string(),
            Route::Add => "/add".to_string(),
            Route::Edit(id) => format!("/edit/{id}"),
        }
    }

    pub fn form_mode(&self) -> Option<FormMode> {
        match self {
            Route::Roster => None,
            Route::Add => Some(FormMode::Create),
            Route::Edit(id) => Some(FormMode::Edit(*id)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no view is mounted at '{0}'")]
    UnknownPath(String),
    #[error("'{0}' is not a valid employee id")]
    InvalidId(String),
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] if trimmed.starts_with('/') => Ok(Route::Roster),
            ["add"] => Ok(Route::Add),
            ["edit", raw_id] => raw_id
                .parse::<EmployeeId>()
                .map(Route::Edit)
                .map_err(|_| RouteError::InvalidId((*raw_id).to_string())),
            _ => Err(RouteError::UnknownPath(path.to_string())),
        }
    }
}
