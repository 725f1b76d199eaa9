//! Holiday request schemas and DTOs

use super::common::id_param;
use crate::validation::{FieldConstraint, Rule, Schema};
use serde::Deserialize;

/// Body of `POST /holidays`
pub fn create_holiday() -> Schema {
    Schema::new(vec![
        FieldConstraint::body(
            "holiday_date",
            Rule::Date,
            "holiday_date must be a valid ISO 8601 date",
        ),
        FieldConstraint::body(
            "description",
            Rule::Text {
                min: Some(1),
                max: Some(255),
                trim: true,
            },
            "Description must be between 1 and 255 characters",
        ),
        FieldConstraint::body("is_recurring", Rule::Bool, "is_recurring must be a boolean")
            .optional(),
    ])
}

/// `PUT /holidays/:id`
pub fn update_holiday() -> Schema {
    Schema::for_update(id_param(), &create_holiday())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateHolidayRequest {
    pub holiday_date: String,
    pub description: String,
    pub is_recurring: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateHolidayRequest {
    pub holiday_date: Option<String>,
    pub description: Option<String>,
    pub is_recurring: Option<bool>,
}
