use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map($name)
            }
        }
    };
}

id_newtype!(EmployeeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Cook,
    Waiter,
    Driver,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Cook, Role::Waiter, Role::Driver];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Cook => "cook",
            Role::Waiter => "waiter",
            Role::Driver => "driver",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}', expected one of cook, waiter, driver")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cook" => Ok(Role::Cook),
            "waiter" => Ok(Role::Waiter),
            "driver" => Ok(Role::Driver),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// An employee record as stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// `+7 (DDD) DDD-DDDD`
    pub phone: String,
    /// `DD.MM.YYYY`
    pub birthday: String,
    pub role: Role,
    #[serde(default)]
    pub is_archive: bool,
}

/// Employee fields without an id, as submitted for creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub phone: String,
    pub birthday: String,
    pub role: Role,
    #[serde(default)]
    pub is_archive: bool,
}

impl EmployeeDraft {
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            phone: self.phone,
            birthday: self.birthday,
            role: self.role,
            is_archive: self.is_archive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_uses_camel_case_archive_flag_on_the_wire() {
        let employee = Employee {
            id: EmployeeId(7),
            name: "Ivan".into(),
            phone: "+7 (900) 123-4567".into(),
            birthday: "01.01.1990".into(),
            role: Role::Waiter,
            is_archive: true,
        };

        let json = serde_json::to_value(&employee).expect("serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["role"], "waiter");
        assert_eq!(json["isArchive"], true);
    }

    #[test]
    fn archive_flag_defaults_to_false_when_absent() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":1,"name":"Anna","phone":"+7 (900) 000-0000","birthday":"02.03.1985","role":"cook"}"#,
        )
        .expect("deserialize");
        assert!(!employee.is_archive);
        assert_eq!(employee.role, Role::Cook);
    }

    #[test]
    fn role_parses_only_known_values() {
        assert_eq!("driver".parse::<Role>(), Ok(Role::Driver));
        assert_eq!(
            "manager".parse::<Role>(),
            Err(UnknownRole("manager".to_string()))
        );
        assert!("Cook".parse::<Role>().is_err());
    }

    #[test]
    fn employee_id_parses_from_route_segment() {
        assert_eq!("42".parse::<EmployeeId>().expect("id"), EmployeeId(42));
        assert!("abc".parse::<EmployeeId>().is_err());
    }
}
