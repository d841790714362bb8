use axum::{http::StatusCode, Json};
use regex::Regex;
use serde_json::json;
use std::{borrow::Cow, sync::OnceLock};
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^[+0-9()\-\s]{3,20}$").expect("Invalid phone number regex"))
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    match phone_regex().is_match(phone.trim()) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_PHONE")
            .with_message(Cow::from("Phone must contain only digits, spaces, +, -, ( and )"))),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        true => Err(ValidationError::new("REQUIRED").with_message(Cow::from("This field is required"))),
        false => Ok(()),
    }
}

/// Empty form fields mean "not provided".
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
