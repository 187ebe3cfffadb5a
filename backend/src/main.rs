//! Backend entry-point: loads settings and serves the registration endpoint.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::config::RegistrationSettings;
use backend::domain::RegistrationService;
use backend::inbound::http::register::{json_config, register};
use backend::inbound::http::state::HttpState;
use backend::outbound::InMemoryUserStore;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = RegistrationSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let hasher = settings
        .credential_hasher()
        .map_err(|e| std::io::Error::other(format!("invalid settings: {e}")))?;
    let service = RegistrationService::new(Arc::new(InMemoryUserStore::new()), Arc::new(hasher));
    let state = web::Data::new(HttpState::new(Arc::new(service)));

    let bind_addr = settings.bind_addr();
    info!(
        %bind_addr,
        hash_mode = %hasher.mode(),
        bcrypt_cost = hasher.cost(),
        "starting registration backend"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config())
            .service(web::scope("/api/v1").service(register))
    })
    .bind(bind_addr)?
    .run()
    .await
}
