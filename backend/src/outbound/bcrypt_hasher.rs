//! bcrypt-backed credential hasher.
//!
//! A 16-byte salt is drawn from the operating system's entropy source for
//! every call, then passed to bcrypt explicitly. In [`HashMode::Async`] the
//! work runs on tokio's blocking pool; in [`HashMode::Sync`] it runs on the
//! calling thread.
//!
//! bcrypt only reads the first 72 bytes of its input. Longer passwords are
//! rejected instead of being silently truncated.

use async_trait::async_trait;
use bcrypt::Version;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::domain::ports::{CredentialHashError, CredentialHasher};
use crate::domain::{HashMode, Password, PasswordHash};

/// bcrypt cost used when configuration does not override it.
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Lowest cost bcrypt accepts.
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest cost bcrypt accepts.
pub const MAX_BCRYPT_COST: u32 = 31;

const SALT_LEN: usize = 16;

/// [`CredentialHasher`] adapter using bcrypt.
#[derive(Debug, Clone, Copy)]
pub struct BcryptCredentialHasher {
    mode: HashMode,
    cost: u32,
}

impl BcryptCredentialHasher {
    /// Build a hasher with an explicit mode and cost.
    pub fn new(mode: HashMode, cost: u32) -> Self {
        Self { mode, cost }
    }

    /// Execution mode selected at construction.
    pub fn mode(&self) -> HashMode {
        self.mode
    }

    /// bcrypt cost factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

fn generate_salt() -> Result<[u8; SALT_LEN], CredentialHashError> {
    let mut salt = [0_u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|err| CredentialHashError::entropy(err.to_string()))?;
    Ok(salt)
}

fn hash_with_fresh_salt(password: &Password, cost: u32) -> Result<PasswordHash, CredentialHashError> {
    let salt = generate_salt()?;
    let parts = bcrypt::non_truncating_hash_with_salt(password.expose(), cost, salt)
        .map_err(|err| CredentialHashError::hash(err.to_string()))?;
    PasswordHash::new(parts.format_for_version(Version::TwoB))
        .map_err(|err| CredentialHashError::hash(err.to_string()))
}

#[async_trait]
impl CredentialHasher for BcryptCredentialHasher {
    async fn hash(&self, password: Password) -> Result<PasswordHash, CredentialHashError> {
        let cost = self.cost;
        match self.mode {
            HashMode::Sync => hash_with_fresh_salt(&password, cost),
            HashMode::Async => {
                tokio::task::spawn_blocking(move || hash_with_fresh_salt(&password, cost))
                    .await
                    .map_err(|err| CredentialHashError::task(err.to_string()))?
            }
        }
    }
}
