//! Validator registry resolving field names to validators.
//!
//! The registry is an ordered list of `(field, validator)` entries. Specific
//! validators are always placed ahead of generic rules, and for any name the
//! earliest entry wins. Names with no entry resolve to
//! [`Resolution::Unconstrained`]: such fields are accepted as-is.

use super::rules::{
    ADDRESS_LENGTH, AGE_MAX, AGE_MIN, FieldValidator, NAME_LENGTH, SpecificValidator,
    ValidationRule,
};

/// Outcome of resolving a field name.
#[derive(Debug, Clone, Copy)]
pub enum Resolution<'a> {
    /// A validator is registered for the field.
    Validator(&'a FieldValidator),
    /// No validator is registered; the field is accepted unvalidated.
    Unconstrained,
}

impl Resolution<'_> {
    /// Whether the field is unconstrained.
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Self::Unconstrained)
    }
}

/// Immutable lookup from field name to validator.
#[derive(Debug, Clone)]
pub struct ValidatorRegistry {
    entries: Vec<(String, FieldValidator)>,
}

impl ValidatorRegistry {
    /// Start an empty registry.
    pub fn builder() -> ValidatorRegistryBuilder {
        ValidatorRegistryBuilder::default()
    }

    /// Resolve `field` to its validator, preferring the earliest entry.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::registration::ValidatorRegistry;
    ///
    /// let registry = ValidatorRegistry::default();
    /// assert!(!registry.resolve("age").is_unconstrained());
    /// assert!(registry.resolve("nickname").is_unconstrained());
    /// ```
    pub fn resolve(&self, field: &str) -> Resolution<'_> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map_or(Resolution::Unconstrained, |(_, validator)| {
                Resolution::Validator(validator)
            })
    }

    /// Number of registered entries, including shadowed ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no validators are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ValidatorRegistry {
    /// Registry with the built-in specific validators and generic table.
    fn default() -> Self {
        let (name_min, name_max) = NAME_LENGTH;
        let (address_min, address_max) = ADDRESS_LENGTH;
        Self::builder()
            .specific("firstname", SpecificValidator::Firstname)
            .specific("lastname", SpecificValidator::Lastname)
            .specific("number", SpecificValidator::Number)
            .specific("age", SpecificValidator::Age)
            .generic(
                "firstname",
                ValidationRule::Length {
                    min: name_min,
                    max: name_max,
                },
            )
            .generic(
                "lastname",
                ValidationRule::Length {
                    min: name_min,
                    max: name_max,
                },
            )
            .generic("number", ValidationRule::PhoneNumber)
            .generic("gender", ValidationRule::Gender)
            .generic(
                "age",
                ValidationRule::IntegerRange {
                    min: AGE_MIN,
                    max: AGE_MAX,
                },
            )
            .generic(
                "address",
                ValidationRule::Length {
                    min: address_min,
                    max: address_max,
                },
            )
            .generic("phoneNumber", ValidationRule::PhoneNumber)
            .build()
    }
}

/// Builder collecting specific validators and generic rules.
///
/// [`ValidatorRegistryBuilder::build`] places every specific entry before
/// every generic one, so call order between the two tiers does not matter.
#[derive(Debug, Default)]
pub struct ValidatorRegistryBuilder {
    specific: Vec<(String, FieldValidator)>,
    generic: Vec<(String, FieldValidator)>,
}

impl ValidatorRegistryBuilder {
    /// Register a specific validator for `field`.
    #[must_use]
    pub fn specific(mut self, field: impl Into<String>, validator: SpecificValidator) -> Self {
        self.specific
            .push((field.into(), FieldValidator::Specific(validator)));
        self
    }

    /// Register a generic rule for `field`.
    #[must_use]
    pub fn generic(mut self, field: impl Into<String>, rule: ValidationRule) -> Self {
        self.generic.push((field.into(), FieldValidator::Generic(rule)));
        self
    }

    /// Freeze the entries into a registry.
    pub fn build(self) -> ValidatorRegistry {
        let Self {
            mut specific,
            generic,
        } = self;
        specific.extend(generic);
        ValidatorRegistry { entries: specific }
    }
}
