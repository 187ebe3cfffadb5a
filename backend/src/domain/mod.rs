//! Domain primitives, services, and ports.
//!
//! Purpose: Define the registration pipeline independently of transport and
//! storage. Adapters depend on these types; nothing here imports actix or a
//! concrete store.
//!
//! Public surface:
//! - DomainError / ErrorCode: transport-agnostic error payload.
//! - registration: validators, payload types, and the user record.
//! - credentials: plaintext password, password hash, hash mode.
//! - RegistrationService: orchestrates one registration attempt.
//! - ports: traits implemented by inbound and outbound adapters.

pub mod credentials;
pub mod error;
pub mod ports;
pub mod registration;
pub mod registration_service;

pub use self::credentials::{DEFAULT_HASH_MODE, HashMode, Password, PasswordHash};
pub use self::error::{DetailCode, DomainError, DomainErrorValidationError, ErrorCode};
pub use self::registration::{RegistrationError, RegistrationPayload, UserRecord};
pub use self::registration_service::RegistrationService;
