//! Field validation engine for additional profile fields.

use std::sync::Arc;

use tracing::trace;

use super::error::ValidationError;
use super::payload::AdditionalFields;
use super::registry::{Resolution, ValidatorRegistry};

/// Validates [`AdditionalFields`] against a shared [`ValidatorRegistry`].
#[derive(Debug, Clone)]
pub struct FieldValidationEngine {
    registry: Arc<ValidatorRegistry>,
}

impl FieldValidationEngine {
    /// Build an engine over `registry`.
    pub fn new(registry: Arc<ValidatorRegistry>) -> Self {
        Self { registry }
    }

    /// Registry used for resolution.
    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Validate fields in declaration order, stopping at the first failure.
    ///
    /// Fields without a registered validator are accepted.
    pub fn validate(&self, fields: &AdditionalFields) -> Result<(), ValidationError> {
        for (field, value) in fields.iter() {
            match self.registry.resolve(field) {
                Resolution::Validator(validator) => {
                    if !validator.check(value) {
                        return Err(ValidationError::invalid(field));
                    }
                }
                Resolution::Unconstrained => {
                    trace!(field, "no validator registered; accepting field");
                }
            }
        }
        Ok(())
    }
}

impl Default for FieldValidationEngine {
    fn default() -> Self {
        Self::new(Arc::new(ValidatorRegistry::default()))
    }
}
