//! Shared helpers for HTTP integration tests.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use camps_backend::Trace;
use camps_backend::domain::ResourceLocator;
use camps_backend::inbound::http::api_scope;
use camps_backend::inbound::http::state::HttpState;
use camps_backend::outbound::memory::InMemoryCampRepository;

/// The full API over `repo`, wrapped in the trace middleware.
pub fn app_over(
    repo: Arc<InMemoryCampRepository>,
    locator: ResourceLocator,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Trace)
        .app_data(web::Data::new(HttpState::from_repository(repo, locator)))
        .service(api_scope())
}
