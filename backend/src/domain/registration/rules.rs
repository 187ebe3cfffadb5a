//! Field validation rules.
//!
//! [`ValidationRule`] is the generic, parameterised rule table shared between
//! fields. [`SpecificValidator`] binds a rule to exactly one field name and
//! takes only the value. Every predicate returns `false` for JSON values of
//! the wrong type instead of failing.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Accepted `gender` values, compared case-insensitively.
pub const GENDERS: [&str; 3] = ["male", "female", "other"];
/// Required digit count for `number` and `phoneNumber`.
pub const PHONE_DIGITS: usize = 10;
/// Inclusive lower bound for `age`.
pub const AGE_MIN: i64 = 18;
/// Inclusive upper bound for `age`.
pub const AGE_MAX: i64 = 100;
/// Inclusive length bounds for `firstname` and `lastname`.
pub const NAME_LENGTH: (usize, usize) = (1, 8);
/// Inclusive length bounds for `address`.
pub const ADDRESS_LENGTH: (usize, usize) = (1, 100);

/// String whose length in characters lies within `min..=max`.
pub fn has_length_within(value: &Value, min: usize, max: usize) -> bool {
    value
        .as_str()
        .map(|text| text.chars().count())
        .is_some_and(|length| (min..=max).contains(&length))
}

/// String of exactly [`PHONE_DIGITS`] ASCII digits.
///
/// JSON numbers are rejected so leading zeros are never lost.
pub fn is_phone_number(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|text| text.len() == PHONE_DIGITS && text.bytes().all(|b| b.is_ascii_digit()))
}

/// One of [`GENDERS`], ignoring case.
pub fn is_gender(value: &Value) -> bool {
    value.as_str().is_some_and(|text| {
        let lowered = text.to_lowercase();
        GENDERS.contains(&lowered.as_str())
    })
}

fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0)
                .map(|float| float as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Integer within `min..=max`. Whole floats such as `25.0` and integer
/// strings count as integers.
pub fn is_integer_within(value: &Value, min: i64, max: i64) -> bool {
    parse_integer(value).is_some_and(|number| (min..=max).contains(&number))
}

/// Generic table-driven rule; each variant carries its own parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// String length in characters within the bounds.
    Length { min: usize, max: usize },
    /// Ten-digit numeric string.
    PhoneNumber,
    /// One of the accepted genders.
    Gender,
    /// Integer within the bounds.
    IntegerRange { min: i64, max: i64 },
}

impl ValidationRule {
    /// Evaluate the rule against `value` using the variant's parameters.
    pub fn check(&self, value: &Value) -> bool {
        match *self {
            Self::Length { min, max } => has_length_within(value, min, max),
            Self::PhoneNumber => is_phone_number(value),
            Self::Gender => is_gender(value),
            Self::IntegerRange { min, max } => is_integer_within(value, min, max),
        }
    }
}

/// Single-value predicate supplied by callers extending the registry.
#[derive(Clone)]
pub struct CustomValidator(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl CustomValidator {
    /// Wrap a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    fn check(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomValidator(..)")
    }
}

/// Validator bound to one field; invoked with the value only.
#[derive(Debug, Clone)]
pub enum SpecificValidator {
    /// `firstname`: 1–8 characters.
    Firstname,
    /// `lastname`: 1–8 characters.
    Lastname,
    /// `number`: ten-digit numeric string.
    Number,
    /// `age`: integer from 18 to 100.
    Age,
    /// Caller-supplied predicate.
    Custom(CustomValidator),
}

impl SpecificValidator {
    /// Evaluate the validator against `value`.
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Self::Firstname | Self::Lastname => {
                has_length_within(value, NAME_LENGTH.0, NAME_LENGTH.1)
            }
            Self::Number => is_phone_number(value),
            Self::Age => is_integer_within(value, AGE_MIN, AGE_MAX),
            Self::Custom(custom) => custom.check(value),
        }
    }
}

/// Resolved validator for a field: a specific override or a generic rule.
#[derive(Debug, Clone)]
pub enum FieldValidator {
    Specific(SpecificValidator),
    Generic(ValidationRule),
}

impl FieldValidator {
    /// Evaluate the validator against `value`.
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Self::Specific(validator) => validator.check(value),
            Self::Generic(rule) => rule.check(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("a"), true)]
    #[case(json!("abcdefgh"), true)]
    #[case(json!("toolongname"), false)]
    #[case(json!(""), false)]
    #[case(json!("éèêëàâäô"), true)]
    #[case(json!(5), false)]
    fn name_length_rule(#[case] value: Value, #[case] expected: bool) {
        let rule = ValidationRule::Length { min: 1, max: 8 };
        assert_eq!(rule.check(&value), expected);
        assert_eq!(SpecificValidator::Firstname.check(&value), expected);
    }

    #[rstest]
    #[case(json!("0123456789"), true)]
    #[case(json!("012345678"), false)]
    #[case(json!("01234567890"), false)]
    #[case(json!("01234x6789"), false)]
    #[case(json!(1234567890), false)]
    #[case(json!(null), false)]
    fn phone_number_rule(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(ValidationRule::PhoneNumber.check(&value), expected);
        assert_eq!(SpecificValidator::Number.check(&value), expected);
    }

    #[rstest]
    #[case(json!("male"), true)]
    #[case(json!("Female"), true)]
    #[case(json!("OTHER"), true)]
    #[case(json!("unknown"), false)]
    #[case(json!(1), false)]
    fn gender_rule(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(ValidationRule::Gender.check(&value), expected);
    }

    #[rstest]
    #[case(json!(18), true)]
    #[case(json!(100), true)]
    #[case(json!("25"), true)]
    #[case(json!(" 42 "), true)]
    #[case(json!(17), false)]
    #[case(json!(101), false)]
    #[case(json!(5), false)]
    #[case(json!(25.0), true)]
    #[case(json!(100.0), true)]
    #[case(json!(25.5), false)]
    #[case(json!(17.0), false)]
    #[case(json!(1.0e300), false)]
    #[case(json!("twenty"), false)]
    #[case(json!(true), false)]
    fn age_rule(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(SpecificValidator::Age.check(&value), expected);
        assert_eq!(
            ValidationRule::IntegerRange { min: 18, max: 100 }.check(&value),
            expected
        );
    }

    #[rstest]
    fn address_rule_bounds() {
        let rule = ValidationRule::Length { min: 1, max: 100 };
        assert!(rule.check(&json!("a".repeat(100))));
        assert!(!rule.check(&json!("a".repeat(101))));
    }

    #[rstest]
    fn custom_validator_delegates_to_predicate() {
        let validator = FieldValidator::Specific(SpecificValidator::Custom(
            CustomValidator::new(|value| value == &json!("ok")),
        ));
        assert!(validator.check(&json!("ok")));
        assert!(!validator.check(&json!("nope")));
    }
}
