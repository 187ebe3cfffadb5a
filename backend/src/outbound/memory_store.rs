//! In-memory user store.
//!
//! Keeps records in a mutex-guarded vector. Suitable for development and
//! tests; nothing survives a restart.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::UserRecord;
use crate::domain::ports::{UserStore, UserStoreError};

/// [`UserStore`] adapter holding records in process memory.
///
/// Usernames are unique; a second record with a stored username is rejected
/// with [`UserStoreError::Conflict`].
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<UserRecord>>, UserStoreError> {
        self.records
            .lock()
            .map_err(|_| UserStoreError::connection("in-memory user store lock poisoned"))
    }

    /// Look up a stored record by username.
    pub fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, UserStoreError> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .find(|record| record.username().as_str() == username)
            .cloned())
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize, UserStoreError> {
        Ok(self.lock()?.len())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn save(&self, record: UserRecord) -> Result<(), UserStoreError> {
        let mut records = self.lock()?;
        if records
            .iter()
            .any(|existing| existing.username() == record.username())
        {
            return Err(UserStoreError::conflict(record.username().as_str()));
        }
        debug!(username = %record.username(), "storing user record");
        records.push(record);
        Ok(())
    }
}
