//! Registration pipeline building blocks.
//!
//! Public surface:
//! - [`admit`]: mandatory field gate splitting a [`RegistrationPayload`].
//! - [`validate_identity`]: fixed username/email/password rules.
//! - [`ValidatorRegistry`] and [`FieldValidationEngine`]: per-field rule
//!   dispatch over [`AdditionalFields`].
//! - [`UserRecord`]: the record handed to storage.
//! - [`RegistrationError`] and [`ValidationError`]: failure taxonomy.

mod engine;
mod error;
mod gate;
mod identity;
mod payload;
mod record;
mod registry;
mod rules;

pub use self::engine::FieldValidationEngine;
pub use self::error::{MISSING_MANDATORY_MESSAGE, RegistrationError, ValidationError};
pub use self::gate::{AdmittedPayload, IdentityValues, admit, is_truthy};
pub use self::identity::{
    Email, IDENTITY_MIN_LENGTH, PASSWORD_SYMBOLS, Username, ValidatedIdentity, is_valid_email,
    is_valid_password, is_valid_username, validate_identity, validate_password,
};
pub use self::payload::{
    AdditionalFields, EMAIL_FIELD, MANDATORY_FIELDS, PASSWORD_FIELD, PayloadShapeError,
    RegistrationPayload, USERNAME_FIELD,
};
pub use self::record::UserRecord;
pub use self::registry::{Resolution, ValidatorRegistry, ValidatorRegistryBuilder};
pub use self::rules::{
    AGE_MAX, AGE_MIN, CustomValidator, FieldValidator, GENDERS, PHONE_DIGITS, SpecificValidator,
    ValidationRule,
};
