use std::borrow::Cow;

use axum::{http::StatusCode, Json};
use regex::Regex;
use serde_json::json;
use ulid::Ulid;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

/// Wraps a single field failure raised outside of `#[derive(Validate)]`.
pub fn field_error(field: &'static str, error: ValidationError) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let digit = Regex::new(r"\d").expect("Invalid password digit regex");
    let uppercase = Regex::new(r"\p{Lu}").expect("Invalid password uppercase regex");

    if !digit.is_match(password) {
        return Err(ValidationError::new("PASSWORD_NO_DIGIT")
            .with_message(Cow::from("Password must contain at least one digit.")));
    }

    if !uppercase.is_match(password) {
        return Err(ValidationError::new("PASSWORD_NO_UPPER").with_message(Cow::from(
            "Password must contain at least one uppercase letter.",
        )));
    }

    Ok(())
}

pub fn validate_ids(ids: &[String]) -> Result<(), ValidationError> {
    match ids.iter().all(|id| Ulid::from_string(id).is_ok()) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_ID")
            .with_message(Cow::from("Every id must be a valid identifier"))),
    }
}

pub fn validate_email_domain(email: &str, allowed: &[String]) -> Result<(), ValidationError> {
    if allowed.is_empty() {
        return Ok(());
    }

    let domain = email.rsplit('@').next().unwrap_or_default().to_lowercase();
    match allowed.contains(&domain) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_DOMAIN").with_message(Cow::from(format!(
            "Registration using \"{}\" is not allowed.",
            domain
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_needs_digit_and_uppercase() {
        assert!(validate_password("Password1").is_ok());
        assert_eq!(
            validate_password("Password").unwrap_err().code,
            "PASSWORD_NO_DIGIT"
        );
        assert_eq!(
            validate_password("password1").unwrap_err().code,
            "PASSWORD_NO_UPPER"
        );
    }

    #[test]
    fn ids_must_be_ulids() {
        let id = Ulid::new().to_string();
        assert!(validate_ids(&[id.clone()]).is_ok());
        assert!(validate_ids(&[id, "1".to_string()]).is_err());
    }

    #[test]
    fn empty_allow_list_accepts_any_domain() {
        assert!(validate_email_domain("someone@anything.io", &[]).is_ok());
    }

    #[test]
    fn allow_list_is_enforced_case_insensitively() {
        let allowed = vec!["kbtu.kz".to_string()];
        assert!(validate_email_domain("student@KBTU.kz", &allowed).is_ok());

        let error = validate_email_domain("someone@gmail.com", &allowed).unwrap_err();
        assert_eq!(error.code, "INVALID_DOMAIN");
    }

    #[test]
    fn field_errors_render_under_the_field_name() {
        let (status, Json(body)) = into_response(field_error(
            "email",
            ValidationError::new("EMAIL_TAKEN"),
        ));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["email"][0]["code"], "EMAIL_TAKEN");
    }
}
