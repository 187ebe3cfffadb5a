//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn invalid_request_constructor_sets_code() {
    let err = DomainError::invalid_request("bad");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = DomainError::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(DomainErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_panics_on_blank_message() {
    let result = std::panic::catch_unwind(|| DomainError::internal(""));
    assert!(result.is_err());
}

#[rstest]
fn serialises_details_and_snake_case_code() {
    let err = DomainError::invalid_request("Invalid age.")
        .with_details(json!({ "field": "age", "code": "invalid_field" }));

    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "Invalid age.",
            "details": { "field": "age", "code": "invalid_field" }
        })
    );
}

#[rstest]
fn omits_absent_details() {
    let value = serde_json::to_value(DomainError::internal("boom")).expect("serialise error");
    assert!(value.get("details").is_none());
    assert_eq!(value.get("code"), Some(&json!("internal_error")));
}

#[rstest]
fn deserialisation_enforces_message_invariant() {
    let payload = json!({ "code": "internal_error", "message": "  " });
    let result: Result<DomainError, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[rstest]
#[case(DetailCode::MissingField, "missing_field")]
#[case(DetailCode::InvalidField, "invalid_field")]
#[case(DetailCode::MalformedBody, "malformed_body")]
fn detail_codes_serialise_snake_case(#[case] code: DetailCode, #[case] expected: &str) {
    assert_eq!(serde_json::to_value(code).expect("serialise code"), json!(expected));
}

#[rstest]
fn invalid_field_names_the_field() {
    let err = DomainError::invalid_field("age", "Invalid age.");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "Invalid age.");
    assert_eq!(
        err.details(),
        Some(&json!({ "field": "age", "code": "invalid_field" }))
    );
}

#[rstest]
fn missing_fields_lists_every_name() {
    let err = DomainError::missing_fields("required", &["username", "email", "password"]);
    assert_eq!(
        err.details(),
        Some(&json!({ "fields": ["username", "email", "password"], "code": "missing_field" }))
    );
}

#[rstest]
fn malformed_body_carries_only_the_code() {
    let err = DomainError::malformed_body("unreadable");
    assert_eq!(err.details(), Some(&json!({ "code": "malformed_body" })));
}
