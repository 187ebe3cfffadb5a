//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports ([`UserStore`], [`CredentialHasher`]) describe what the
//! registration service needs from adapters. The driving port
//! ([`UserRegistration`]) is what inbound adapters call. Each port exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_hasher;
mod user_registration;
mod user_store;

#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHashError, CredentialHasher};
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
