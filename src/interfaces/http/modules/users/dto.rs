//! User DTOs

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::user::{validate_name, validate_surname};
use crate::domain::{CreateUserDto, DomainError, User};

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserCreate {
    /// Latin or Cyrillic letters, `-` and `+` only
    #[validate(custom(function = "name_letters"))]
    #[schema(example = "Anna")]
    pub name: String,
    /// Latin or Cyrillic letters, `-` and `+` only
    #[validate(custom(function = "surname_letters"))]
    #[schema(example = "Ivanova")]
    pub surname: String,
    #[validate(email(message = "Invalid email address"))]
    #[schema(example = "anna@example.com")]
    pub email: String,
}

impl From<UserCreate> for CreateUserDto {
    fn from(req: UserCreate) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            email: req.email,
        }
    }
}

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShowUser {
    pub user_id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for ShowUser {
    fn from(u: User) -> Self {
        Self {
            user_id: u.user_id,
            name: u.name,
            surname: u.surname,
            email: u.email,
            is_active: u.is_active,
        }
    }
}

// ── validator glue ──────────────────────────────────────────────

fn name_letters(value: &str) -> Result<(), ValidationError> {
    validate_name(value).map_err(into_validation_error)
}

fn surname_letters(value: &str) -> Result<(), ValidationError> {
    validate_surname(value).map_err(into_validation_error)
}

fn into_validation_error(e: DomainError) -> ValidationError {
    let mut err = ValidationError::new("letters");
    err.message = Some(Cow::Owned(match e {
        DomainError::Validation { message, .. } => message,
        other => other.to_string(),
    }));
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, surname: &str, email: &str) -> UserCreate {
        UserCreate {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }

    fn message(errors: &validator::ValidationErrors, field: &str) -> Option<String> {
        errors
            .field_errors()
            .get(field)
            .and_then(|errs| errs.first())
            .and_then(|e| e.message.as_ref())
            .map(|m| m.to_string())
    }

    #[test]
    fn accepts_valid_request() {
        assert!(request("Anna", "Ivanova", "anna@example.com").validate().is_ok());
        assert!(request("Анна", "Иванова-Петрова", "anna@example.com").validate().is_ok());
    }

    #[test]
    fn rejects_name_with_digit() {
        let errors = request("Anna1", "Ivanova", "anna@example.com")
            .validate()
            .unwrap_err();
        assert_eq!(
            message(&errors, "name").as_deref(),
            Some("Name should contain only letters")
        );
        assert!(message(&errors, "surname").is_none());
    }

    #[test]
    fn rejects_surname_with_symbol() {
        let errors = request("Anna", "Ivanova!", "anna@example.com")
            .validate()
            .unwrap_err();
        assert_eq!(
            message(&errors, "surname").as_deref(),
            Some("Surname should contain only letters")
        );
    }

    #[test]
    fn rejects_bad_email() {
        let errors = request("Anna", "Ivanova", "not-an-email")
            .validate()
            .unwrap_err();
        assert_eq!(
            message(&errors, "email").as_deref(),
            Some("Invalid email address")
        );
    }

    #[test]
    fn show_user_serializes_all_fields() {
        let user = User::new("Anna", "Ivanova", "anna@example.com");
        let json = serde_json::to_value(ShowUser::from(user.clone())).unwrap();
        assert_eq!(json["user_id"], user.user_id.to_string());
        assert_eq!(json["name"], "Anna");
        assert_eq!(json["surname"], "Ivanova");
        assert_eq!(json["email"], "anna@example.com");
        assert_eq!(json["is_active"], true);
    }
}
