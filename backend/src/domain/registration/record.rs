//! Persisted user record.

use serde::Serialize;

use super::identity::{Email, Username};
use super::payload::AdditionalFields;
use crate::domain::credentials::PasswordHash;

/// User record handed to the store after every check has passed.
///
/// ## Invariants
/// - `password` is always a [`PasswordHash`]; plaintext cannot be stored.
/// - Additional fields serialise flat beside the identity fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    username: Username,
    email: Email,
    password: PasswordHash,
    #[serde(flatten)]
    additional: AdditionalFields,
}

impl UserRecord {
    /// Assemble a record from validated parts.
    pub fn new(
        username: Username,
        email: Email,
        password: PasswordHash,
        additional: AdditionalFields,
    ) -> Self {
        Self {
            username,
            email,
            password,
            additional,
        }
    }

    /// Validated username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Validated email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Stored password hash.
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    /// Profile fields carried through from the payload.
    pub fn additional(&self) -> &AdditionalFields {
        &self.additional
    }
}
