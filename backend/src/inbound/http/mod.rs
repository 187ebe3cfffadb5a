//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod register;
pub mod state;

pub use error::ApiResult;
