//! Registration payload and the additional profile fields carved out of it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Reserved payload key holding the username.
pub const USERNAME_FIELD: &str = "username";
/// Reserved payload key holding the email address.
pub const EMAIL_FIELD: &str = "email";
/// Reserved payload key holding the plaintext password.
pub const PASSWORD_FIELD: &str = "password";
/// The identity fields every registration must carry.
pub const MANDATORY_FIELDS: [&str; 3] = [USERNAME_FIELD, EMAIL_FIELD, PASSWORD_FIELD];

/// Raised when an inbound document is not a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("registration payload must be a JSON object")]
pub struct PayloadShapeError;

/// Key/value mapping submitted by the caller for one registration attempt.
///
/// Key order is the order the caller declared the fields in. `Debug` lists
/// keys only so the plaintext password never reaches logs.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RegistrationPayload(Map<String, Value>);

impl RegistrationPayload {
    /// Wrap an already parsed JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub(crate) fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("keys", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl From<Map<String, Value>> for RegistrationPayload {
    fn from(value: Map<String, Value>) -> Self {
        Self::new(value)
    }
}

impl TryFrom<Value> for RegistrationPayload {
    type Error = PayloadShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields)),
            _ => Err(PayloadShapeError),
        }
    }
}

/// Payload fields outside the mandatory identity set, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AdditionalFields(Map<String, Value>);

impl AdditionalFields {
    pub(crate) fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Number of additional fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload carried only identity fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
