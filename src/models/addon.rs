//! Addon request schemas and DTOs

use super::common::id_param;
use crate::validation::{FieldConstraint, Rule, Schema};
use serde::Deserialize;

/// Body of `POST /addons`
pub fn create_addon() -> Schema {
    Schema::new(vec![
        FieldConstraint::body(
            "title",
            Rule::Text {
                min: Some(2),
                max: Some(100),
                trim: true,
            },
            "Title must be between 2 and 100 characters",
        ),
        FieldConstraint::body(
            "price",
            Rule::Float {
                min: Some(0.0),
                max: None,
            },
            "Price must be a number greater than or equal to 0",
        ),
        FieldConstraint::body(
            "description",
            Rule::Text {
                min: None,
                max: Some(1000),
                trim: true,
            },
            "Description must be at most 1000 characters",
        )
        .optional(),
        FieldConstraint::body("is_active", Rule::Bool, "is_active must be a boolean").optional(),
    ])
}

/// `PUT /addons/:id`
pub fn update_addon() -> Schema {
    Schema::for_update(id_param(), &create_addon())
}

/// Request to create an addon
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateAddonRequest {
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Request to update an addon
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateAddonRequest {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IdParam;
    use crate::validation::RequestData;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_create_rejects_short_title_and_negative_price() {
        let request = RequestData::new().with_body(json!({ "title": "A", "price": -1 }));
        let errors = create_addon().check(&request).unwrap_err();

        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["title"][0].code, "length");
        assert_eq!(fields["price"][0].code, "range");
    }

    #[test]
    fn test_create_accepts_valid_addon() {
        let request =
            RequestData::new().with_body(json!({ "title": "Valid Title", "price": 10.5 }));
        let validated = create_addon().check(&request).unwrap();

        let addon: CreateAddonRequest = validated.body_as().unwrap();
        assert_eq!(
            addon,
            CreateAddonRequest {
                title: "Valid Title".to_string(),
                price: 10.5,
                description: None,
                is_active: None,
            }
        );
    }

    #[test]
    fn test_create_coerces_form_style_values() {
        let request = RequestData::new().with_body(json!({
            "title": "  Extra Storage ",
            "price": "4.99",
            "is_active": "true"
        }));
        let addon: CreateAddonRequest = create_addon().check(&request).unwrap().body_as().unwrap();

        assert_eq!(addon.title, "Extra Storage");
        assert_eq!(addon.price, 4.99);
        assert_eq!(addon.is_active, Some(true));
    }

    #[test]
    fn test_create_requires_title_and_price() {
        let errors = create_addon().check(&RequestData::new()).unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["title"][0].code, "required");
        assert_eq!(fields["price"][0].code, "required");
    }

    #[test]
    fn test_update_accepts_partial_body() {
        let request = RequestData::new()
            .with_params(json!({ "id": "5" }))
            .with_body(json!({ "price": 0 }));
        let validated = update_addon().check(&request).unwrap();

        let id: IdParam = validated.params_as().unwrap();
        let update: UpdateAddonRequest = validated.body_as().unwrap();
        assert_eq!(id.id, 5);
        assert_eq!(
            update,
            UpdateAddonRequest {
                price: Some(0.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_rejects_bad_id_and_still_checks_supplied_fields() {
        let request = RequestData::new()
            .with_params(json!({ "id": "0" }))
            .with_body(json!({ "title": "A" }));
        let errors = update_addon().check(&request).unwrap_err();

        let fields = errors.field_errors();
        assert_eq!(fields["id"][0].code, "range");
        assert_eq!(fields["title"][0].code, "length");
    }
}
