//! Registration domain service.
//!
//! Sequences the pipeline for one attempt: mandatory field gate, identity
//! validators, additional field engine, credential hasher, then a single
//! store write. Each stage short-circuits, so the store is only reached when
//! every check has passed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{
    CredentialHashError, CredentialHasher, UserRegistration, UserStore, UserStoreError,
};
use crate::domain::registration::{
    FieldValidationEngine, RegistrationError, RegistrationPayload, UserRecord, ValidatedIdentity,
    ValidatorRegistry, admit, validate_identity,
};

fn map_hash_error(err: CredentialHashError) -> RegistrationError {
    error!(error = %err, "password hashing failed");
    RegistrationError::hashing_failure(err.to_string())
}

fn map_store_error(err: UserStoreError) -> RegistrationError {
    error!(error = %err, "user store rejected registration");
    RegistrationError::storage_failure(err.to_string())
}

fn log_rejection(err: &RegistrationError) {
    if err.is_internal() {
        return;
    }
    match err.field() {
        Some(field) => debug!(field, "registration rejected"),
        None => debug!(error = %err, "registration rejected"),
    }
}

/// Registration service implementing the [`UserRegistration`] driving port.
pub struct RegistrationService<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
    engine: FieldValidationEngine,
}

impl<S, H> Clone for RegistrationService<S, H> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            hasher: Arc::clone(&self.hasher),
            engine: self.engine.clone(),
        }
    }
}

impl<S, H> RegistrationService<S, H> {
    /// Create a service with the built-in validator registry.
    ///
    /// The hasher's execution mode is fixed by how `hasher` was built.
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self {
            store,
            hasher,
            engine: FieldValidationEngine::default(),
        }
    }

    /// Replace the validator registry used for additional fields.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<ValidatorRegistry>) -> Self {
        self.engine = FieldValidationEngine::new(registry);
        self
    }
}

impl<S, H> RegistrationService<S, H>
where
    S: UserStore,
    H: CredentialHasher,
{
    /// Run the registration pipeline for `payload`.
    pub async fn register_user(
        &self,
        payload: RegistrationPayload,
    ) -> Result<UserRecord, RegistrationError> {
        let record = self.build_record(payload).await.inspect_err(log_rejection)?;

        self.store
            .save(record.clone())
            .await
            .map_err(map_store_error)?;

        info!(username = %record.username(), "user registered");
        Ok(record)
    }

    async fn build_record(
        &self,
        payload: RegistrationPayload,
    ) -> Result<UserRecord, RegistrationError> {
        let admitted = admit(payload)?;
        let ValidatedIdentity {
            username,
            email,
            password,
        } = validate_identity(admitted.identity)?;
        self.engine.validate(&admitted.additional)?;

        let hash = self.hasher.hash(password).await.map_err(map_hash_error)?;
        Ok(UserRecord::new(username, email, hash, admitted.additional))
    }
}

#[async_trait]
impl<S, H> UserRegistration for RegistrationService<S, H>
where
    S: UserStore,
    H: CredentialHasher,
{
    async fn register_user(
        &self,
        payload: RegistrationPayload,
    ) -> Result<UserRecord, RegistrationError> {
        RegistrationService::register_user(self, payload).await
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
