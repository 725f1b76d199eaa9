//! Endpoint schema table
//!
//! Maps every validated endpoint to its schema. Schemas are built once on
//! first use and shared read-only afterwards.

use crate::error::{AppError, AppResult};
use crate::models;
use crate::validation::{RequestData, Schema, Validated};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CreateAddon,
    UpdateAddon,
    GetAddon,
    DeleteAddon,
    AnalyticsQuery,
    CreateHoliday,
    UpdateHoliday,
    GetHoliday,
    DeleteHoliday,
    CreateSetting,
    UpdateSetting,
    GetSetting,
    DeleteSetting,
}

impl Endpoint {
    pub const ALL: [Endpoint; 13] = [
        Endpoint::CreateAddon,
        Endpoint::UpdateAddon,
        Endpoint::GetAddon,
        Endpoint::DeleteAddon,
        Endpoint::AnalyticsQuery,
        Endpoint::CreateHoliday,
        Endpoint::UpdateHoliday,
        Endpoint::GetHoliday,
        Endpoint::DeleteHoliday,
        Endpoint::CreateSetting,
        Endpoint::UpdateSetting,
        Endpoint::GetSetting,
        Endpoint::DeleteSetting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::CreateAddon => "create_addon",
            Endpoint::UpdateAddon => "update_addon",
            Endpoint::GetAddon => "get_addon",
            Endpoint::DeleteAddon => "delete_addon",
            Endpoint::AnalyticsQuery => "analytics_query",
            Endpoint::CreateHoliday => "create_holiday",
            Endpoint::UpdateHoliday => "update_holiday",
            Endpoint::GetHoliday => "get_holiday",
            Endpoint::DeleteHoliday => "delete_holiday",
            Endpoint::CreateSetting => "create_setting",
            Endpoint::UpdateSetting => "update_setting",
            Endpoint::GetSetting => "get_setting",
            Endpoint::DeleteSetting => "delete_setting",
        }
    }

    fn build_schema(self) -> Schema {
        match self {
            Endpoint::CreateAddon => models::create_addon(),
            Endpoint::UpdateAddon => models::update_addon(),
            Endpoint::AnalyticsQuery => models::analytics_query(),
            Endpoint::CreateHoliday => models::create_holiday(),
            Endpoint::UpdateHoliday => models::update_holiday(),
            Endpoint::CreateSetting => models::create_setting(),
            Endpoint::UpdateSetting => models::update_setting(),
            Endpoint::GetAddon
            | Endpoint::DeleteAddon
            | Endpoint::GetHoliday
            | Endpoint::DeleteHoliday
            | Endpoint::GetSetting
            | Endpoint::DeleteSetting => Schema::new(vec![models::id_param()]),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static SCHEMAS: Lazy<HashMap<Endpoint, Schema>> = Lazy::new(|| {
    Endpoint::ALL
        .iter()
        .map(|endpoint| (*endpoint, endpoint.build_schema()))
        .collect()
});

/// Schema attached to `endpoint`
pub fn schema_for(endpoint: Endpoint) -> &'static Schema {
    // ALL lists every variant, so the entry always exists
    &SCHEMAS[&endpoint]
}

/// Validate a request for `endpoint`, wrapping failures as [`AppError::Validation`].
pub fn validate_request(endpoint: Endpoint, request: &RequestData) -> AppResult<Validated> {
    schema_for(endpoint).check(request).map_err(|errors| {
        debug!(
            endpoint = %endpoint,
            fields = errors.errors().len(),
            "Request failed validation"
        );
        AppError::Validation(errors)
    })
}
