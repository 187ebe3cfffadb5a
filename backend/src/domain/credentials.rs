//! Credential primitives: plaintext passwords, stored hashes, and the hashing
//! execution mode.
//!
//! The plaintext only ever lives inside [`Password`], which zeroises its
//! buffer on drop. A [`crate::domain::UserRecord`] can only be built from a
//! [`PasswordHash`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

/// Plaintext password accepted by the identity validators.
///
/// `Debug` output is redacted.
pub struct Password(Zeroizing<String>);

impl Password {
    pub(crate) fn from_zeroizing(plaintext: Zeroizing<String>) -> Self {
        Self(plaintext)
    }

    /// Expose the plaintext to a hashing adapter.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Errors raised when wrapping a hash produced by an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    /// Adapter returned an empty hash string.
    #[error("password hash must not be empty")]
    Empty,
}

/// Salted password hash in the adapter's encoded form (e.g. `$2b$12$...`).
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash, rejecting blank values.
    pub fn new(encoded: impl Into<String>) -> Result<Self, PasswordHashError> {
        let encoded = encoded.into();
        if encoded.trim().is_empty() {
            return Err(PasswordHashError::Empty);
        }
        Ok(Self(encoded))
    }

    /// Encoded hash string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Execution mode for the credential hasher.
///
/// There is no `Default` impl; callers pick a mode explicitly or fall back to
/// [`DEFAULT_HASH_MODE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashMode {
    /// Hash on the calling thread.
    Sync,
    /// Hash on the blocking pool and await the result.
    Async,
}

/// Hash mode used when configuration does not name one.
pub const DEFAULT_HASH_MODE: HashMode = HashMode::Async;

impl HashMode {
    /// Configuration spelling of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
        }
    }
}

impl fmt::Display for HashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown hash mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hash mode `{0}`; expected `sync` or `async`")]
pub struct ParseHashModeError(String);

impl FromStr for HashMode {
    type Err = ParseHashModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sync" => Ok(Self::Sync),
            "async" => Ok(Self::Async),
            _ => Err(ParseHashModeError(value.to_owned())),
        }
    }
}
