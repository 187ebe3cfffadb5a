//! Port abstraction for user storage adapters and their errors.
use async_trait::async_trait;

use crate::domain::registration::UserRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserStoreError {
        /// Store could not be reached.
        Connection { message: String } => "user store connection failed: {message}",
        /// A record with the same username is already stored.
        Conflict { username: String } => "user {username} already exists",
        /// The write itself failed.
        Write { message: String } => "user store write failed: {message}",
    }
}

/// Driven port persisting registered users.
///
/// Adapters own their concurrency control. The registration service calls
/// [`UserStore::save`] at most once per attempt and never retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user record, taking ownership of it.
    async fn save(&self, record: UserRecord) -> Result<(), UserStoreError>;
}
