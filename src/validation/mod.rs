//! Declarative request validation
//!
//! A [`Schema`] is an ordered list of [`FieldConstraint`]s. Each constraint is
//! checked independently against the incoming [`RequestData`]; every failure
//! is collected into [`validator::ValidationErrors`] so the HTTP layer can
//! report all bad fields at once. Fields that pass are coerced and copied into
//! [`Validated`].

mod rules;

pub use rules::{
    Rule, CODE_BOOLEAN, CODE_FLOAT, CODE_INTEGER, CODE_ISO8601, CODE_LENGTH, CODE_ONE_OF,
    CODE_RANGE, CODE_REQUIRED, CODE_TYPE,
};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

/// Where in the request a field is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Param,
    Query,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// One rule applied to one request field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConstraint {
    pub field: &'static str,
    pub location: Location,
    pub presence: Presence,
    pub rule: Rule,
    /// Reported for every failure on this field, including a missing value
    pub message: &'static str,
}

impl FieldConstraint {
    pub fn new(location: Location, field: &'static str, rule: Rule, message: &'static str) -> Self {
        Self {
            field,
            location,
            presence: Presence::Required,
            rule,
            message,
        }
    }

    pub fn param(field: &'static str, rule: Rule, message: &'static str) -> Self {
        Self::new(Location::Param, field, rule, message)
    }

    pub fn query(field: &'static str, rule: Rule, message: &'static str) -> Self {
        Self::new(Location::Query, field, rule, message)
    }

    pub fn body(field: &'static str, rule: Rule, message: &'static str) -> Self {
        Self::new(Location::Body, field, rule, message)
    }

    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    /// Path parameters identify the resource and stay required.
    fn relaxed(self) -> Self {
        match self.location {
            Location::Param => self,
            _ => self.optional(),
        }
    }

    fn failure(&self, code: &'static str) -> ValidationError {
        let mut err = ValidationError::new(code);
        err.message = Some(self.message.into());
        err
    }
}

/// Raw request fields as handed over by the HTTP layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestData {
    pub params: Map<String, Value>,
    pub query: Map<String, Value>,
    pub body: Map<String, Value>,
}

impl RequestData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-object values leave the location empty.
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = into_object(params);
        self
    }

    pub fn with_query(mut self, query: Value) -> Self {
        self.query = into_object(query);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = into_object(body);
        self
    }

    pub fn location(&self, location: Location) -> &Map<String, Value> {
        match location {
            Location::Param => &self.params,
            Location::Query => &self.query,
            Location::Body => &self.body,
        }
    }
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Coerced values of the fields a schema declared and accepted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validated {
    pub params: Map<String, Value>,
    pub query: Map<String, Value>,
    pub body: Map<String, Value>,
}

impl Validated {
    pub fn get(&self, location: Location, field: &str) -> Option<&Value> {
        self.location(location).get(field)
    }

    pub fn params_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.params.clone()))
    }

    pub fn query_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.query.clone()))
    }

    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.body.clone()))
    }

    fn location(&self, location: Location) -> &Map<String, Value> {
        match location {
            Location::Param => &self.params,
            Location::Query => &self.query,
            Location::Body => &self.body,
        }
    }

    fn location_mut(&mut self, location: Location) -> &mut Map<String, Value> {
        match location {
            Location::Param => &mut self.params,
            Location::Query => &mut self.query,
            Location::Body => &mut self.body,
        }
    }
}

/// Ordered field constraints for one endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    constraints: Vec<FieldConstraint>,
}

impl Schema {
    pub fn new(constraints: Vec<FieldConstraint>) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &[FieldConstraint] {
        &self.constraints
    }

    /// Derive a partial-update schema from a create schema.
    ///
    /// `identifier` goes first and is always required. Every other field from
    /// `create` keeps its rule but becomes optional, except path parameters.
    pub fn for_update(identifier: FieldConstraint, create: &Schema) -> Self {
        let identifier = FieldConstraint {
            presence: Presence::Required,
            ..identifier
        };

        let constraints = std::iter::once(identifier)
            .chain(create.constraints.iter().cloned().map(FieldConstraint::relaxed))
            .collect();

        Self { constraints }
    }

    /// Check every constraint against `request`.
    ///
    /// A missing field is one that is absent or JSON `null`. Optional missing
    /// fields are skipped and do not appear in the result.
    pub fn check(&self, request: &RequestData) -> Result<Validated, ValidationErrors> {
        let mut validated = Validated::default();
        let mut errors = ValidationErrors::new();

        for constraint in &self.constraints {
            let raw = request
                .location(constraint.location)
                .get(constraint.field)
                .filter(|v| !v.is_null());

            let Some(raw) = raw else {
                if constraint.is_required() {
                    errors.add(constraint.field, constraint.failure(CODE_REQUIRED));
                }
                continue;
            };

            match constraint.rule.apply(raw) {
                Ok(value) => {
                    validated
                        .location_mut(constraint.location)
                        .insert(constraint.field.to_string(), value);
                }
                Err(code) => errors.add(constraint.field, constraint.failure(code)),
            }
        }

        if errors.is_empty() {
            Ok(validated)
        } else {
            Err(errors)
        }
    }
}
