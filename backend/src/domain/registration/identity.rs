//! Identity field validators for username, email, and password.
//!
//! These rules are fixed. They are invoked unconditionally by the
//! registration service and never resolved through the
//! [`super::ValidatorRegistry`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use zeroize::Zeroizing;

use super::error::ValidationError;
use super::gate::IdentityValues;
use super::payload::{EMAIL_FIELD, PASSWORD_FIELD, USERNAME_FIELD};
use crate::domain::credentials::Password;

/// Minimum username and password length.
pub const IDENTITY_MIN_LENGTH: usize = 8;

/// Symbols a password may contain; at least one is required.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        Regex::new("^[A-Za-z0-9]{8,}$")
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Alphanumeric, at least eight characters.
pub fn is_valid_username(username: &str) -> bool {
    username_regex().is_match(username)
}

/// `local@domain.tld` with a single `@` and no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

fn is_password_symbol(ch: char) -> bool {
    PASSWORD_SYMBOLS.contains(ch)
}

/// At least eight characters drawn from letters, digits, and
/// [`PASSWORD_SYMBOLS`], with one of each class present.
pub fn is_valid_password(password: &str) -> bool {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut symbol = false;
    let mut length = 0_usize;

    for ch in password.chars() {
        length += 1;
        match ch {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            ch if is_password_symbol(ch) => symbol = true,
            _ => return false,
        }
    }

    length >= IDENTITY_MIN_LENGTH && lower && upper && digit && symbol
}

/// Validated username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, ValidationError> {
        let username = username.into();
        if !is_valid_username(&username) {
            return Err(ValidationError::new(
                USERNAME_FIELD,
                "username must be at least 8 letters or digits",
            ));
        }
        Ok(Self(username))
    }

    /// Borrow the validated value.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if !is_valid_email(&email) {
            return Err(ValidationError::new(
                EMAIL_FIELD,
                "email must have the shape local@domain.tld",
            ));
        }
        Ok(Self(email))
    }

    /// Borrow the validated value.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn password_error() -> ValidationError {
    ValidationError::new(
        PASSWORD_FIELD,
        "password must be at least 8 characters with upper and lower case letters, a digit, \
         and one of @$!%*?&",
    )
}

/// Validate a plaintext password held in a zeroising buffer.
pub fn validate_password(plaintext: Zeroizing<String>) -> Result<Password, ValidationError> {
    if !is_valid_password(&plaintext) {
        return Err(password_error());
    }
    Ok(Password::from_zeroizing(plaintext))
}

/// Identity fields that passed every format check.
#[derive(Debug)]
pub struct ValidatedIdentity {
    pub username: Username,
    pub email: Email,
    pub password: Password,
}

fn string_or<F>(value: Value, reject: F) -> Result<String, ValidationError>
where
    F: FnOnce() -> ValidationError,
{
    match value {
        Value::String(text) => Ok(text),
        _ => Err(reject()),
    }
}

/// Run the identity validators in order: username, email, password.
///
/// The first failure is returned and later validators are skipped.
pub fn validate_identity(values: IdentityValues) -> Result<ValidatedIdentity, ValidationError> {
    let IdentityValues {
        username,
        email,
        password,
    } = values;
    // Move the plaintext into a zeroising buffer before anything else can fail.
    let password = match password {
        Value::String(text) => Some(Zeroizing::new(text)),
        _ => None,
    };

    let username = Username::new(string_or(username, || {
        ValidationError::new(USERNAME_FIELD, "username must be a string")
    })?)?;
    let email = Email::new(string_or(email, || {
        ValidationError::new(EMAIL_FIELD, "email must be a string")
    })?)?;
    let password = validate_password(password.ok_or_else(password_error)?)?;

    Ok(ValidatedIdentity {
        username,
        email,
        password,
    })
}
