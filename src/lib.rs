//! gatepost - credential hashing and request validation
//!
//! Two independent building blocks for an API server:
//! - [`auth::PasswordHasher`]: bcrypt hashing and verification, offloaded to
//!   tokio's blocking pool
//! - [`validation::Schema`]: declarative per-endpoint field constraints,
//!   with the concrete schemas in [`models`] and the lookup table in
//!   [`endpoints`]
//!
//! Configuration is read once via [`config::Settings::load`].

pub mod auth;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod validation;

pub use auth::{CredentialError, PasswordHasher};
pub use config::{ConfigError, Settings};
pub use endpoints::{schema_for, validate_request, Endpoint};
pub use error::{AppError, AppResult, FieldError};
pub use validation::{RequestData, Schema, Validated};
