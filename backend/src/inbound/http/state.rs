//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserRegistration;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn UserRegistration>,
}

impl HttpState {
    /// Construct state from the registration port.
    pub fn new(registration: Arc<dyn UserRegistration>) -> Self {
        Self { registration }
    }
}
