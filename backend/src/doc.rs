//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every camp, talk and health endpoint together with
//! the schema wrappers from [`crate::inbound::http::schemas`], which keep the
//! domain representations free of utoipa derives.
//!
//! The document backs Swagger UI in debug builds and is printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    CampModelSchema, ErrorCodeSchema, ErrorSchema, LocationModelSchema, SpeakerModelSchema,
    TalkModelSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Camps API",
        description = "Conferences (camps), their talks and the speakers giving them."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::camps::list_camps,
        crate::inbound::http::camps::search_camps,
        crate::inbound::http::camps::get_camp,
        crate::inbound::http::camps::create_camp,
        crate::inbound::http::camps::update_camp,
        crate::inbound::http::camps::delete_camp,
        crate::inbound::http::talks::list_talks,
        crate::inbound::http::talks::get_talk,
        crate::inbound::http::talks::create_talk,
        crate::inbound::http::talks::update_talk,
        crate::inbound::http::talks::delete_talk,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CampModelSchema,
        LocationModelSchema,
        TalkModelSchema,
        SpeakerModelSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "camps", description = "Conferences addressed by moniker"),
        (name = "talks", description = "Talks nested under their camp"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
