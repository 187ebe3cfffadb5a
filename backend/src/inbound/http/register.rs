//! Registration API handler.
//!
//! ```text
//! POST /api/v1/register {"username":"testuser1","email":"test@example.com",
//!                        "password":"Testpass1@","age":25}
//! POST /api/v1/register username=testuser1&email=test%40example.com&...
//! ```
//!
//! JSON objects and urlencoded forms are both accepted. Form values arrive as
//! strings.

use actix_web::error::JsonPayloadError;
use actix_web::web::Either;
use actix_web::{HttpRequest, HttpResponse, post, web};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::registration::{AdditionalFields, Email, PayloadShapeError, Username};
use crate::domain::{DomainError, RegistrationPayload, UserRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Message returned alongside a successfully stored user.
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful";

/// Public view of a stored user. The password hash is never echoed back.
#[derive(Debug, Serialize)]
pub struct RegisteredUser<'a> {
    username: &'a Username,
    email: &'a Email,
    #[serde(flatten)]
    additional: &'a AdditionalFields,
}

impl<'a> From<&'a UserRecord> for RegisteredUser<'a> {
    fn from(record: &'a UserRecord) -> Self {
        Self {
            username: record.username(),
            email: record.email(),
            additional: record.additional(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RegistrationResponse<'a> {
    message: &'static str,
    user: RegisteredUser<'a>,
}

/// Request body accepted by [`register`].
pub type RegistrationBody = Either<web::Json<Value>, web::Form<Map<String, Value>>>;

fn map_shape_error(err: PayloadShapeError) -> DomainError {
    DomainError::malformed_body(err.to_string())
}

fn map_json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    DomainError::malformed_body(format!("malformed JSON body: {err}")).into()
}

/// JSON extractor settings rendering body errors in the domain error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(map_json_error)
}

/// Register a new user from a JSON object or urlencoded form body.
///
/// Validation failures surface as `400` with the offending field in
/// `details`; hashing and storage failures surface as a redacted `500`.
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    body: RegistrationBody,
) -> ApiResult<HttpResponse> {
    let payload = match body {
        Either::Left(json) => {
            RegistrationPayload::try_from(json.into_inner()).map_err(map_shape_error)?
        }
        Either::Right(form) => RegistrationPayload::from(form.into_inner()),
    };
    let record = state.registration.register_user(payload).await?;
    Ok(HttpResponse::Ok().json(RegistrationResponse {
        message: REGISTRATION_SUCCESS_MESSAGE,
        user: RegisteredUser::from(&record),
    }))
}

#[cfg(test)]
#[path = "register_tests.rs"]
mod tests;
