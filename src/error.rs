//! Error handling module
//!
//! Provides unified error types for the entire crate.

use crate::auth::CredentialError;
use crate::config::ConfigError;
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A single failing request field, ready for the HTTP layer to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Flatten validation failures into a per-field list, sorted by field name.
    ///
    /// Non-validation errors have no field breakdown and yield an empty list.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            AppError::Validation(errors) => flatten_field_errors(errors),
            _ => Vec::new(),
        }
    }

    /// Whether the caller is at fault (bad input) rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// Result type alias for crate operations
pub type AppResult<T> = Result<T, AppError>;

fn flatten_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .errors()
        .iter()
        .filter_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(list) => Some((field.to_string(), list)),
            _ => None,
        })
        .flat_map(|(field, list)| {
            list.iter().map(move |err| FieldError {
                field: field.clone(),
                code: err.code.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field)),
            })
        })
        .collect();

    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::ValidationError;

    #[test]
    fn test_field_errors_are_flattened_and_sorted() {
        let mut errors = ValidationErrors::new();
        let mut price = ValidationError::new("range");
        price.message = Some("Price must be at least 0".into());
        errors.add("price", price);
        errors.add("title", ValidationError::new("length"));

        let err = AppError::from(errors);
        assert!(err.is_client_error());
        assert_eq!(
            err.field_errors(),
            vec![
                FieldError {
                    field: "price".to_string(),
                    code: "range".to_string(),
                    message: "Price must be at least 0".to_string(),
                },
                FieldError {
                    field: "title".to_string(),
                    code: "length".to_string(),
                    message: "Invalid value for title".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_config_error_has_no_field_errors() {
        let err = AppError::from(ConfigError::InvalidValue("nope".to_string()));
        assert!(!err.is_client_error());
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn test_field_error_serializes() {
        let json = serde_json::to_value(FieldError {
            field: "id".to_string(),
            code: "integer".to_string(),
            message: "ID must be a positive integer".to_string(),
        })
        .unwrap();
        assert_eq!(json["field"], "id");
        assert_eq!(json["message"], "ID must be a positive integer");
    }
}
