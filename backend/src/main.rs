//! Backend entry-point: loads settings, selects the camp store and serves
//! the REST API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use camps_backend::domain::ResourceLocator;
use camps_backend::inbound::http::health::HealthState;
use camps_backend::settings::AppSettings;
use server::{CampStore, ServerConfig, create_server, drain_on};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let locator = match settings.public_base_url() {
        Some(base) => ResourceLocator::with_base(base).map_err(io::Error::other)?,
        None => ResourceLocator::relative(),
    };
    let store = CampStore::from_settings(&settings)
        .await
        .map_err(|e| io::Error::other(format!("failed to prepare camp store: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, store).with_locator(locator);
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(
        tokio::signal::ctrl_c(),
        health_state,
        server.handle(),
    ));
    info!(%bind_addr, "camps API listening");
    server.await
}
