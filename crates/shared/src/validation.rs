//! Field rules applied to employee form values before anything is submitted.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Employee, EmployeeDraft, EmployeeId, Role};

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+7 \(\d{3}\) \d{3}-\d{4}$").expect("phone pattern compiles"));

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.\d{4}$")
        .expect("birthday pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Birthday,
    Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field:?} is required")]
    Required { field: Field },
    #[error("{field:?} has an invalid format")]
    Format { field: Field },
    #[error("birthday {0} is not a calendar date")]
    NotACalendarDate(String),
    #[error("unknown role '{0}'")]
    UnknownRole(String),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required { field } | ValidationError::Format { field } => *field,
            ValidationError::NotACalendarDate(_) => Field::Birthday,
            ValidationError::UnknownRole(_) => Field::Role,
        }
    }

    /// Message shown next to the offending form field.
    pub fn field_message(&self) -> &'static str {
        match self {
            ValidationError::Required { field: Field::Name } => "Enter a name",
            ValidationError::Required { field: Field::Phone } => "Enter a phone number",
            ValidationError::Required {
                field: Field::Birthday,
            } => "Enter a birth date",
            ValidationError::Required { field: Field::Role } | ValidationError::UnknownRole(_) => {
                "Select a role"
            }
            ValidationError::Format { .. } | ValidationError::NotACalendarDate(_) => {
                "Invalid format"
            }
        }
    }
}

/// Raw values as entered in the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    pub name: String,
    pub phone: String,
    pub birthday: String,
    /// Empty until a role is picked.
    pub role: String,
    #[serde(default)]
    pub is_archive: bool,
}

impl EmployeeForm {
    pub fn validate(&self) -> Result<EmployeeDraft, Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::Required { field: Field::Name });
        }
        if let Err(err) = validate_phone(&self.phone) {
            errors.push(err);
        }
        if let Err(err) = validate_birthday(&self.birthday) {
            errors.push(err);
        }
        let role = match self.role.as_str() {
            "" => {
                errors.push(ValidationError::Required { field: Field::Role });
                None
            }
            raw => match raw.parse::<Role>() {
                Ok(role) => Some(role),
                Err(_) => {
                    errors.push(ValidationError::UnknownRole(raw.to_string()));
                    None
                }
            },
        };

        match role {
            Some(role) if errors.is_empty() => Ok(EmployeeDraft {
                name: self.name.clone(),
                phone: self.phone.clone(),
                birthday: self.birthday.clone(),
                role,
                is_archive: self.is_archive,
            }),
            _ => Err(errors),
        }
    }

    pub fn validate_with_id(&self, id: EmployeeId) -> Result<Employee, Vec<ValidationError>> {
        self.validate().map(|draft| draft.with_id(id))
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            phone: employee.phone.clone(),
            birthday: employee.birthday.clone(),
            role: employee.role.as_str().to_string(),
            is_archive: employee.is_archive,
        }
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: Field::Phone,
        });
    }
    if !PHONE_PATTERN.is_match(phone) {
        return Err(ValidationError::Format {
            field: Field::Phone,
        });
    }
    Ok(())
}

pub fn validate_birthday(birthday: &str) -> Result<NaiveDate, ValidationError> {
    if birthday.is_empty() {
        return Err(ValidationError::Required {
            field: Field::Birthday,
        });
    }
    if !BIRTHDAY_PATTERN.is_match(birthday) {
        return Err(ValidationError::Format {
            field: Field::Birthday,
        });
    }
    NaiveDate::parse_from_str(birthday, "%d.%m.%Y")
        .map_err(|_| ValidationError::NotACalendarDate(birthday.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivan() -> EmployeeForm {
        EmployeeForm {
            name: "Ivan".into(),
            phone: "+7 (900) 123-4567".into(),
            birthday: "01.01.1990".into(),
            role: "waiter".into(),
            is_archive: false,
        }
    }

    #[test]
    fn valid_form_produces_draft() {
        let draft = ivan().validate().expect("valid");
        assert_eq!(draft.name, "Ivan");
        assert_eq!(draft.role, Role::Waiter);
        assert!(!draft.is_archive);
    }

    #[test]
    fn name_is_submitted_as_entered() {
        let mut form = ivan();
        form.name = " Ivan Petrov ".into();
        assert_eq!(form.validate().expect("valid").name, " Ivan Petrov ");

        form.name = "   ".into();
        let errors = form.validate().expect_err("blank name");
        assert_eq!(errors, vec![ValidationError::Required { field: Field::Name }]);
    }

    #[test]
    fn phone_must_match_mask_exactly() {
        assert!(validate_phone("+7 (900) 123-4567").is_ok());
        assert_eq!(
            validate_phone("+7 900 123-4567"),
            Err(ValidationError::Format {
                field: Field::Phone
            })
        );
        assert!(validate_phone("+7 (900) 123-45678").is_err());
        assert!(validate_phone("+8 (900) 123-4567").is_err());
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        assert!(validate_birthday("29.02.2000").is_ok());
        assert_eq!(
            validate_birthday("29.02.2001"),
            Err(ValidationError::NotACalendarDate("29.02.2001".into()))
        );
        assert_eq!(
            validate_birthday("1.1.1990"),
            Err(ValidationError::Format {
                field: Field::Birthday
            })
        );
        assert!(validate_birthday("31.13.1990").is_err());
    }

    #[test]
    fn collects_every_failing_field() {
        let form = EmployeeForm::default();
        let errors = form.validate().expect_err("empty form is invalid");
        let fields: Vec<Field> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Phone, Field::Birthday, Field::Role]
        );
        assert_eq!(errors[3].field_message(), "Select a role");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let mut form = ivan();
        form.role = "manager".into();
        let errors = form.validate().expect_err("invalid role");
        assert_eq!(errors, vec![ValidationError::UnknownRole("manager".into())]);
    }

    #[test]
    fn form_round_trips_from_existing_employee() {
        let employee = ivan().validate_with_id(EmployeeId(3)).expect("valid");
        let form = EmployeeForm::from(&employee);
        assert_eq!(form, ivan());
    }
}
