//! Driving port for the registration use-case.
//!
//! Inbound adapters call this port with a parsed payload and render the
//! outcome; they never see the validators, the hasher, or the store.

use async_trait::async_trait;

use crate::domain::registration::{RegistrationError, RegistrationPayload, UserRecord};

/// Domain use-case port for registering users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Validate, hash, and persist one registration attempt.
    async fn register_user(
        &self,
        payload: RegistrationPayload,
    ) -> Result<UserRecord, RegistrationError>;
}
