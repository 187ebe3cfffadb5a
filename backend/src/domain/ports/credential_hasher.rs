//! Port abstraction for password hashing adapters.
use async_trait::async_trait;

use crate::domain::credentials::{Password, PasswordHash};

use super::define_port_error;

define_port_error! {
    /// Errors raised while deriving a password hash.
    pub enum CredentialHashError {
        /// The entropy source could not produce a salt.
        Entropy { message: String } => "salt generation failed: {message}",
        /// The hashing primitive rejected its input.
        Hash { message: String } => "password hashing failed: {message}",
        /// The background hashing task did not complete.
        Task { message: String } => "hashing task failed: {message}",
    }
}

/// Driven port turning a validated plaintext password into a salted hash.
///
/// Implementations generate a fresh salt for every call. The plaintext is
/// consumed so it is dropped (and zeroised) once hashing completes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hash `password` with a freshly generated salt.
    async fn hash(&self, password: Password) -> Result<PasswordHash, CredentialHashError>;
}
