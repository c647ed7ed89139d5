//! HTTP inbound adapter exposing the camp and talk REST endpoints.

pub mod camps;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod talks;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Every camp and talk route under `/api`, with extractor errors mapped to
/// the JSON error envelope.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use camps_backend::domain::ResourceLocator;
/// use camps_backend::inbound::http::{api_scope, state::HttpState};
/// use camps_backend::outbound::memory::InMemoryCampRepository;
///
/// let repo = Arc::new(InMemoryCampRepository::with_sample_data());
/// let state = HttpState::from_repository(repo, ResourceLocator::relative());
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(validation::json_config())
        .app_data(validation::query_config())
        .app_data(validation::path_config())
        .service(camps::list_camps)
        .service(camps::search_camps)
        .service(camps::get_camp)
        .service(camps::create_camp)
        .service(camps::update_camp)
        .service(camps::delete_camp)
        .service(talks::list_talks)
        .service(talks::get_talk)
        .service(talks::create_talk)
        .service(talks::update_talk)
        .service(talks::delete_talk)
}
