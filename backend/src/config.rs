//! Process settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `REGISTRATION_*` environment variables, or a
//! configuration file. `bcrypt_cost` carries a default layer so an empty
//! configuration still loads; the other settings fall back to explicit
//! default constants through their accessors.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{DEFAULT_HASH_MODE, HashMode};
use crate::outbound::{
    BcryptCredentialHasher, DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST,
};

/// Address the HTTP server binds when none is configured.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

/// Raised when loaded settings cannot build the service's adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// bcrypt refuses costs outside its supported range.
    #[error(
        "bcrypt cost {cost} is outside {min}..={max}",
        min = MIN_BCRYPT_COST,
        max = MAX_BCRYPT_COST
    )]
    BcryptCostOutOfRange { cost: u32 },
}

/// Configuration values for the registration backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRATION")]
pub struct RegistrationSettings {
    /// Credential hashing mode: `sync` or `async`.
    pub hash_mode: Option<HashMode>,
    /// bcrypt cost factor.
    #[ortho_config(default = DEFAULT_BCRYPT_COST)]
    pub bcrypt_cost: u32,
    /// HTTP bind address.
    pub bind_addr: Option<SocketAddr>,
}

impl RegistrationSettings {
    /// Configured hash mode, falling back to [`DEFAULT_HASH_MODE`].
    pub fn hash_mode(&self) -> HashMode {
        self.hash_mode.unwrap_or(DEFAULT_HASH_MODE)
    }

    /// Configured bcrypt cost, [`DEFAULT_BCRYPT_COST`] unless overridden.
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    /// Configured bind address, falling back to [`DEFAULT_BIND_ADDR`].
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Build the credential hasher these settings describe.
    ///
    /// # Errors
    /// Returns [`SettingsError::BcryptCostOutOfRange`] when the cost is one
    /// bcrypt would reject on every call.
    pub fn credential_hasher(&self) -> Result<BcryptCredentialHasher, SettingsError> {
        let cost = self.bcrypt_cost();
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(SettingsError::BcryptCostOutOfRange { cost });
        }
        Ok(BcryptCredentialHasher::new(self.hash_mode(), cost))
    }
}
