//! Key/value setting schemas and DTOs

use super::common::id_param;
use crate::validation::{FieldConstraint, Rule, Schema};
use serde::Deserialize;

/// Body of `POST /settings`
pub fn create_setting() -> Schema {
    Schema::new(vec![
        FieldConstraint::body(
            "key",
            Rule::Text {
                min: Some(1),
                max: Some(255),
                trim: true,
            },
            "Key must be between 1 and 255 characters",
        ),
        FieldConstraint::body(
            "value",
            Rule::Text {
                min: None,
                max: Some(5000),
                trim: false,
            },
            "Value must be at most 5000 characters",
        ),
    ])
}

/// `PUT /settings/:id`
pub fn update_setting() -> Schema {
    Schema::for_update(id_param(), &create_setting())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateSettingRequest {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateSettingRequest {
    pub key: Option<String>,
    pub value: Option<String>,
}
