//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::CampStore;

use state_builders::build_http_state;

use std::future::Future;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use camps_backend::Trace;
#[cfg(debug_assertions)]
use camps_backend::doc::ApiDoc;
use camps_backend::inbound::http::api_scope;
use camps_backend::inbound::http::health::{HealthState, live, ready};
use camps_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from `config`.
///
/// The returned [`Server`] must be awaited to drive the listener. The health
/// state is marked ready once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        store,
        locator,
    } = config;
    let http_state = web::Data::new(build_http_state(&store, locator));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Drain the server once `signal` resolves.
///
/// Liveness probes fail before the listener stops; in-flight requests are
/// allowed to finish.
pub async fn drain_on<F>(signal: F, health_state: web::Data<HealthState>, server: ServerHandle)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(error) = signal.await {
        warn!(%error, "shutdown signal listener failed");
        return;
    }
    info!("shutdown requested, draining");
    health_state.mark_unhealthy();
    server.stop(true).await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use camps_backend::outbound::memory::InMemoryCampRepository;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[actix_web::test]
    async fn drain_fails_liveness_and_stops_the_server() {
        let health_state = web::Data::new(HealthState::new());
        let store = CampStore::Memory(Arc::new(InMemoryCampRepository::new()));
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("valid address"), store);
        let server = create_server(health_state.clone(), config).expect("server binds");
        assert!(health_state.is_ready());

        let handle = server.handle();
        let running = actix_web::rt::spawn(server);
        drain_on(async { Ok(()) }, health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }

    #[rstest]
    #[actix_web::test]
    async fn failed_signal_listener_leaves_the_server_live() {
        let health_state = web::Data::new(HealthState::new());
        let store = CampStore::Memory(Arc::new(InMemoryCampRepository::new()));
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("valid address"), store);
        let server = create_server(health_state.clone(), config).expect("server binds");
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);

        drain_on(
            async { Err(std::io::Error::other("no signal support")) },
            health_state.clone(),
            handle.clone(),
        )
        .await;
        assert!(health_state.is_alive());

        handle.stop(false).await;
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }
}
