//! Outbound adapters implementing domain ports.
//!
//! - **memory_store**: in-process [`crate::domain::ports::UserStore`]
//! - **bcrypt_hasher**: bcrypt [`crate::domain::ports::CredentialHasher`]
//!
//! Adapters are thin translators between domain types and the underlying
//! library. They contain no validation logic.

pub mod bcrypt_hasher;
pub mod memory_store;

pub use bcrypt_hasher::{
    BcryptCredentialHasher, DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST,
};
pub use memory_store::InMemoryUserStore;
