//! Tests for the registration handler.

use super::*;
use crate::domain::ports::{MockUserRegistration, UserRegistration};
use crate::domain::{HashMode, RegistrationError, RegistrationService};
use crate::outbound::{BcryptCredentialHasher, InMemoryUserStore};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

const TEST_COST: u32 = 4;

fn real_registration() -> Arc<dyn UserRegistration> {
    let store = Arc::new(InMemoryUserStore::new());
    let hasher = Arc::new(BcryptCredentialHasher::new(HashMode::Async, TEST_COST));
    Arc::new(RegistrationService::new(store, hasher))
}

async fn send_register(
    registration: Arc<dyn UserRegistration>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(registration)))
            .app_data(json_config())
            .service(web::scope("/api/v1").service(register)),
    )
    .await;

    let request = request.uri("/api/v1/register").to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&bytes).expect("json payload");
    (status, value)
}

async fn post_register(registration: Arc<dyn UserRegistration>, body: Value) -> (StatusCode, Value) {
    send_register(registration, actix_test::TestRequest::post().set_json(&body)).await
}

#[actix_web::test]
async fn successful_registration_echoes_user_without_password() {
    let (status, body) = post_register(
        real_registration(),
        json!({
            "username": "testuser1",
            "email": "test@example.com",
            "password": "Testpass1@",
            "age": 25,
            "nickname": "tester"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some(REGISTRATION_SUCCESS_MESSAGE)
    );
    let user = body.get("user").and_then(Value::as_object).expect("user object");
    assert_eq!(user.get("username"), Some(&json!("testuser1")));
    assert_eq!(user.get("email"), Some(&json!("test@example.com")));
    assert_eq!(user.get("age"), Some(&json!(25)));
    assert_eq!(user.get("nickname"), Some(&json!("tester")));
    assert!(user.get("password").is_none());
}

#[actix_web::test]
async fn missing_identity_fields_are_reported_together() {
    let (status, body) = post_register(
        real_registration(),
        json!({ "username": "testuser1", "email": "", "password": "Testpass1@" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Username, email, and password are required fields.")
    );
    assert_eq!(body.pointer("/details/code"), Some(&json!("missing_field")));
    assert_eq!(
        body.pointer("/details/fields"),
        Some(&json!(["username", "email", "password"]))
    );
}

#[rstest]
#[case(json!({ "username": "short", "email": "test@example.com", "password": "Testpass1@" }), "username")]
#[case(json!({ "username": "testuser1", "email": "invalid-email", "password": "Testpass1@" }), "email")]
#[case(json!({ "username": "testuser1", "email": "test@example.com", "password": "Testpass1@", "age": 17 }), "age")]
#[case(json!({ "username": "testuser1", "email": "test@example.com", "password": "Testpass1@", "gender": "unknown" }), "gender")]
#[actix_web::test]
async fn invalid_fields_name_the_offender(#[case] body: Value, #[case] field: &str) {
    let (status, body) = post_register(real_registration(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("message").and_then(Value::as_str).is_some());
    assert_eq!(body.pointer("/details/field"), Some(&json!(field)));
    assert_eq!(body.pointer("/details/code"), Some(&json!("invalid_field")));
}

#[actix_web::test]
async fn additional_field_failures_use_the_standard_message() {
    let (_, body) = post_register(
        real_registration(),
        json!({
            "username": "testuser1",
            "email": "test@example.com",
            "password": "Testpass1@",
            "phoneNumber": "555-0100"
        }),
    )
    .await;

    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Invalid phoneNumber.")
    );
}

#[actix_web::test]
async fn non_object_bodies_are_rejected() {
    let mut registration = MockUserRegistration::new();
    registration.expect_register_user().times(0);

    let (status, body) = post_register(Arc::new(registration), json!(["testuser1"])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("registration payload must be a JSON object")
    );
    assert_eq!(body.pointer("/details/code"), Some(&json!("malformed_body")));
}

#[actix_web::test]
async fn storage_failures_are_redacted() {
    let mut registration = MockUserRegistration::new();
    registration
        .expect_register_user()
        .times(1)
        .return_once(|_| Err(RegistrationError::storage_failure("database at 10.0.0.3 is down")));

    let (status, body) = post_register(
        Arc::new(registration),
        json!({ "username": "testuser1", "email": "test@example.com", "password": "Testpass1@" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "code": "internal_error", "message": "Internal server error" })
    );
}

#[actix_web::test]
async fn urlencoded_forms_are_registered() {
    let form = [
        ("username", "testuser1"),
        ("email", "test@example.com"),
        ("password", "Testpass1@"),
        ("age", "25"),
        ("gender", "Female"),
    ];
    let (status, body) = send_register(
        real_registration(),
        actix_test::TestRequest::post().set_form(form),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.pointer("/user/username"), Some(&json!("testuser1")));
    assert_eq!(body.pointer("/user/age"), Some(&json!("25")));
    assert!(body.pointer("/user/password").is_none());
}

#[actix_web::test]
async fn urlencoded_forms_report_invalid_fields() {
    let form = [
        ("username", "testuser1"),
        ("email", "test@example.com"),
        ("password", "Testpass1@"),
        ("phoneNumber", "12345"),
    ];
    let (status, body) = send_register(
        real_registration(),
        actix_test::TestRequest::post().set_form(form),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.pointer("/details/field"), Some(&json!("phoneNumber")));
}

#[rstest]
#[case(ContentType::json(), r#"{"username": "testuser1", "#)]
#[case(ContentType::plaintext(), "username=testuser1")]
#[actix_web::test]
async fn unreadable_bodies_use_the_error_envelope(
    #[case] content_type: ContentType,
    #[case] raw: &'static str,
) {
    let mut registration = MockUserRegistration::new();
    registration.expect_register_user().times(0);

    let (status, body) = send_register(
        Arc::new(registration),
        actix_test::TestRequest::post()
            .insert_header(content_type)
            .set_payload(raw),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    assert_eq!(body.pointer("/details/code"), Some(&json!("malformed_body")));
}
