//! Analytics query schema

use crate::validation::{FieldConstraint, Rule, Schema};
use serde::Deserialize;

pub const GRANULARITIES: &[&str] = &["day", "week", "month"];

/// Query string of `GET /analytics`
pub fn analytics_query() -> Schema {
    Schema::new(vec![
        FieldConstraint::query(
            "start_date",
            Rule::Date,
            "start_date must be a valid ISO 8601 date",
        )
        .optional(),
        FieldConstraint::query("end_date", Rule::Date, "end_date must be a valid ISO 8601 date")
            .optional(),
        FieldConstraint::query(
            "granularity",
            Rule::OneOf(GRANULARITIES),
            "granularity must be one of: day, week, month",
        )
        .optional(),
        FieldConstraint::query(
            "addon_id",
            Rule::Int {
                min: Some(1),
                max: None,
            },
            "addon_id must be a positive integer",
        )
        .optional(),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

/// Validated analytics filters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyticsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub granularity: Option<Granularity>,
    pub addon_id: Option<i64>,
}
