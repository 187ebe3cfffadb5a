//! Registration failure taxonomy and its mapping onto the domain error
//! payload.

use thiserror::Error;

use super::payload::MANDATORY_FIELDS;
use crate::domain::DomainError;

/// Message reported by the mandatory field gate.
pub const MISSING_MANDATORY_MESSAGE: &str = "Username, email, and password are required fields.";

/// A single field rejected by its validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    /// Build an error with a custom message.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build the standard `Invalid <field>.` rejection.
    pub fn invalid(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("Invalid {field}.");
        Self { field, message }
    }

    /// Name of the rejected field.
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Human-readable reason.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Terminal outcome of a failed registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// One or more identity fields were absent or falsy.
    #[error("{}", MISSING_MANDATORY_MESSAGE)]
    MissingMandatoryField,
    /// A field failed its resolved validator.
    #[error("{message}")]
    InvalidField { field: String, message: String },
    /// Salt generation or hashing failed.
    #[error("password hashing failed: {message}")]
    HashingFailure { message: String },
    /// The user store rejected the record.
    #[error("failed to persist user: {message}")]
    StorageFailure { message: String },
}

impl RegistrationError {
    /// Helper for hashing failures.
    pub fn hashing_failure(message: impl Into<String>) -> Self {
        Self::HashingFailure {
            message: message.into(),
        }
    }

    /// Helper for storage failures.
    pub fn storage_failure(message: impl Into<String>) -> Self {
        Self::StorageFailure {
            message: message.into(),
        }
    }

    /// Field named by an [`RegistrationError::InvalidField`] failure.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidField { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Validation view of a payload failure; `None` for internal failures.
    ///
    /// The mandatory gate reports every identity field at once, so its
    /// `field` lists them comma-separated.
    pub fn validation_error(&self) -> Option<ValidationError> {
        match self {
            Self::MissingMandatoryField => Some(ValidationError::new(
                MANDATORY_FIELDS.join(", "),
                MISSING_MANDATORY_MESSAGE,
            )),
            Self::InvalidField { field, message } => {
                Some(ValidationError::new(field.as_str(), message.as_str()))
            }
            Self::HashingFailure { .. } | Self::StorageFailure { .. } => None,
        }
    }

    /// Whether the failure is internal rather than caused by the payload.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::HashingFailure { .. } | Self::StorageFailure { .. })
    }
}

impl From<ValidationError> for RegistrationError {
    fn from(value: ValidationError) -> Self {
        let ValidationError { field, message } = value;
        Self::InvalidField { field, message }
    }
}

impl From<RegistrationError> for DomainError {
    fn from(value: RegistrationError) -> Self {
        match value {
            RegistrationError::MissingMandatoryField => {
                DomainError::missing_fields(MISSING_MANDATORY_MESSAGE, &MANDATORY_FIELDS)
            }
            RegistrationError::InvalidField { field, message } => {
                DomainError::invalid_field(field, message)
            }
            internal @ (RegistrationError::HashingFailure { .. }
            | RegistrationError::StorageFailure { .. }) => DomainError::internal(internal.to_string()),
        }
    }
}
