//! Request schemas and DTOs
//!
//! One module per resource. Each exposes the schema for its endpoints and
//! the typed request a validated payload deserializes into.

pub mod addon;
pub mod analytics;
pub mod common;
pub mod holiday;
pub mod setting;

// Re-export commonly used types
pub use addon::*;
pub use analytics::*;
pub use common::*;
pub use holiday::*;
pub use setting::*;
