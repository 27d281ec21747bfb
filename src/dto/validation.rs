use std::{ borrow::Cow, collections::BTreeMap };

use serde::{ Deserialize, Serialize };
use utoipa::ToSchema;
use validator::{ ValidationError, ValidationErrors };

pub const VALIDATION_PROBLEM_TITLE: &str = "One or more validation errors occurred.";

/// Shared "required" rule: blank (empty or whitespace-only) text is missing.
pub fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed(message));
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Flattens validator output into field/message pairs, ordered by field name.
pub fn validation_problems(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut problems: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let message = error.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid ({}).", field, error.code));
                FieldError::new(field, message)
            })
        })
        .collect();

    problems.sort_by(|a, b| a.field.cmp(&b.field));
    problems
}

/// Body of a 422 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationProblem {
    pub title: String,
    pub status: u16,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationProblem {
    pub fn from_field_errors(field_errors: &[FieldError]) -> Self {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in field_errors {
            errors.entry(error.field.clone()).or_default().push(error.message.clone());
        }

        Self {
            title: VALIDATION_PROBLEM_TITLE.to_string(),
            status: 422,
            errors,
        }
    }
}
