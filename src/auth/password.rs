//! Password hashing and verification
//!
//! Uses bcrypt for secure password hashing. Both operations are CPU-bound
//! and run on tokio's blocking pool so request handlers stay responsive.

use crate::config::SecurityConfig;
use thiserror::Error;
use tracing::{debug, error, instrument};

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Salted one-way hasher for user secrets.
///
/// The cost factor only applies to new hashes. Verification reads the cost
/// embedded in the stored hash, so credentials created under an older
/// setting keep working.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            cost: config.salt_rounds,
        }
    }

    /// Cost factor applied by [`PasswordHasher::hash`]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a secret with a fresh random salt.
    ///
    /// Non-string input is hashed through its string representation.
    #[instrument(skip_all, fields(cost = self.cost))]
    pub async fn hash<S>(&self, secret: &S) -> Result<String, CredentialError>
    where
        S: ToString + ?Sized,
    {
        let secret = secret.to_string();
        let cost = self.cost;

        let hashed = run_blocking(move || bcrypt::hash(secret, cost)).await?;
        debug!("Password hashed");
        Ok(hashed)
    }

    /// Verify a secret against a stored hash.
    ///
    /// A missing or empty stored hash never matches. A malformed one is an
    /// error, not a mismatch.
    #[instrument(skip_all)]
    pub async fn verify<S>(
        &self,
        secret: &S,
        stored_hash: Option<&str>,
    ) -> Result<bool, CredentialError>
    where
        S: ToString + ?Sized,
    {
        let stored_hash = stored_hash.unwrap_or_default();
        if stored_hash.is_empty() {
            debug!("No stored hash to verify against");
            return Ok(false);
        }

        let secret = secret.to_string();
        let stored_hash = stored_hash.to_owned();

        let matched = run_blocking(move || bcrypt::verify(secret, &stored_hash)).await?;
        debug!(matched, "Password verified");
        Ok(matched)
    }
}

/// Run a bcrypt call on the blocking pool, logging either failure.
async fn run_blocking<F, T>(task: F) -> Result<T, CredentialError>
where
    F: FnOnce() -> Result<T, bcrypt::BcryptError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(task)
        .await
        .inspect_err(|e| error!("Password hashing task failed: {}", e))?;
    result
        .inspect_err(|e| error!("Password hashing failed: {}", e))
        .map_err(CredentialError::from)
}
