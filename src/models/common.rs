//! Constraints shared across resources

use crate::validation::{FieldConstraint, Rule};
use serde::Deserialize;

/// `:id` path parameter: required positive integer
pub fn id_param() -> FieldConstraint {
    FieldConstraint::param(
        "id",
        Rule::Int {
            min: Some(1),
            max: None,
        },
        "ID must be a positive integer",
    )
}

/// Validated `:id` path parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IdParam {
    pub id: i64,
}
