//! Mandatory field gate.
//!
//! Runs before every other check. A payload passes only when `username`,
//! `email`, and `password` are all present and truthy; the gate then splits
//! the payload into identity values and [`AdditionalFields`].

use serde_json::{Map, Value};

use super::error::RegistrationError;
use super::payload::{
    AdditionalFields, EMAIL_FIELD, PASSWORD_FIELD, RegistrationPayload, USERNAME_FIELD,
};

/// Raw identity values that survived the gate, not yet format-checked.
#[derive(Clone)]
pub struct IdentityValues {
    pub(crate) username: Value,
    pub(crate) email: Value,
    pub(crate) password: Value,
}

/// Output of the gate: identity values plus the remaining profile fields.
pub struct AdmittedPayload {
    pub identity: IdentityValues,
    pub additional: AdditionalFields,
}

/// JSON truthiness: `null`, `false`, `0`, and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Check the mandatory identity fields and split the payload.
///
/// Reports a single combined [`RegistrationError::MissingMandatoryField`]
/// regardless of how many identity fields are missing.
///
/// # Examples
/// ```
/// use backend::domain::registration::{admit, RegistrationError, RegistrationPayload};
/// use serde_json::json;
///
/// let payload = RegistrationPayload::try_from(json!({ "username": "testuser1" })).unwrap();
/// assert!(matches!(admit(payload), Err(RegistrationError::MissingMandatoryField)));
/// ```
pub fn admit(payload: RegistrationPayload) -> Result<AdmittedPayload, RegistrationError> {
    let mut username = None;
    let mut email = None;
    let mut password = None;
    let mut additional = Map::new();

    for (key, value) in payload.into_inner() {
        match key.as_str() {
            USERNAME_FIELD => username = Some(value),
            EMAIL_FIELD => email = Some(value),
            PASSWORD_FIELD => password = Some(value),
            _ => {
                additional.insert(key, value);
            }
        }
    }

    match (
        username.filter(is_truthy),
        email.filter(is_truthy),
        password.filter(is_truthy),
    ) {
        (Some(username), Some(email), Some(password)) => Ok(AdmittedPayload {
            identity: IdentityValues {
                username,
                email,
                password,
            },
            additional: AdditionalFields::new(additional),
        }),
        _ => Err(RegistrationError::MissingMandatoryField),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn payload(value: Value) -> RegistrationPayload {
        RegistrationPayload::try_from(value).expect("object payload")
    }

    #[rstest]
    #[case(json!({ "email": "test@example.com", "password": "Testpass1@" }))]
    #[case(json!({ "username": "testuser1", "password": "Testpass1@" }))]
    #[case(json!({ "username": "testuser1", "email": "test@example.com" }))]
    #[case(json!({ "username": "", "email": "test@example.com", "password": "Testpass1@" }))]
    #[case(json!({ "username": "testuser1", "email": null, "password": "Testpass1@" }))]
    #[case(json!({ "username": "testuser1", "email": "test@example.com", "password": false }))]
    #[case(json!({ "username": 0, "email": "test@example.com", "password": "Testpass1@" }))]
    #[case(json!({ "age": 25 }))]
    fn rejects_missing_or_falsy_identity(#[case] value: Value) {
        let result = admit(payload(value));
        assert!(matches!(result, Err(RegistrationError::MissingMandatoryField)));
    }

    #[rstest]
    fn splits_identity_from_additional_fields() {
        let admitted = admit(payload(json!({
            "nickname": "Bob",
            "username": "testuser1",
            "age": 25,
            "email": "test@example.com",
            "password": "Testpass1@",
            "gender": "female"
        })))
        .expect("identity present");

        assert_eq!(admitted.identity.username, json!("testuser1"));
        let keys: Vec<_> = admitted.additional.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["nickname", "age", "gender"]);
    }

    #[rstest]
    fn truthy_non_strings_pass_the_gate() {
        let admitted = admit(payload(json!({
            "username": 12345678,
            "email": true,
            "password": ["x"]
        })));
        assert!(admitted.is_ok());
    }

    #[rstest]
    #[case(json!(null), false)]
    #[case(json!(0), false)]
    #[case(json!(0.0), false)]
    #[case(json!(""), false)]
    #[case(json!(false), false)]
    #[case(json!(" "), true)]
    #[case(json!(-1), true)]
    #[case(json!({}), true)]
    fn truthiness_follows_json_semantics(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_truthy(&value), expected);
    }
}
