//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ResourceLocator;
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryCampRepository;

/// Build the API over `state`, wrapped in the trace middleware.
pub fn app_with_state(
    state: HttpState,
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
        .app_data(web::Data::new(state))
        .service(api_scope())
}

/// Build the API over the sample in-memory store, returning the store so
/// tests can inspect it afterwards.
pub fn sample_app() -> (
    Arc<InMemoryCampRepository>,
    App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    >,
) {
    let repo = Arc::new(InMemoryCampRepository::with_sample_data());
    let state = HttpState::from_repository(Arc::clone(&repo), ResourceLocator::relative());
    (repo, app_with_state(state))
}
