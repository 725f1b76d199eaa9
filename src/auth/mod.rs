//! Credential handling
//!
//! Provides salted one-way hashing and verification of user secrets.
//! Storing the resulting hashes is left to the caller.

mod password;

pub use password::{CredentialError, PasswordHasher};
