//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and are registered under the
//! domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// A precondition or validation rule failed, or nothing was changed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The camp store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Moniker already exists")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context such as `{ "field": "name", "code": "too_long" }`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::SpeakerModel`].
#[derive(ToSchema)]
#[schema(as = SpeakerModel, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SpeakerModelSchema {
    #[schema(example = 1)]
    speaker_id: Option<i32>,
    #[schema(example = "Shawn")]
    first_name: Option<String>,
    #[schema(example = "Wildermuth")]
    last_name: Option<String>,
    middle_name: Option<String>,
    company: Option<String>,
    company_url: Option<String>,
    blog_url: Option<String>,
    twitter: Option<String>,
    #[schema(rename = "gitHub")]
    github: Option<String>,
}

/// OpenAPI schema for [`crate::domain::TalkModel`].
///
/// On create, `speaker.speakerId` must name an existing speaker. On update,
/// `talkId` selects the talk.
#[derive(ToSchema)]
#[schema(as = TalkModel, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TalkModelSchema {
    #[schema(example = 1)]
    talk_id: Option<i32>,
    #[schema(example = "Entity Framework From Scratch")]
    title: Option<String>,
    #[schema(rename = "abstract")]
    abstract_text: Option<String>,
    #[schema(example = 100, minimum = 100, maximum = 300)]
    level: Option<i32>,
    speaker: Option<SpeakerModelSchema>,
}

/// OpenAPI schema for [`crate::domain::LocationModel`], the nested venue
/// form accepted on camp writes.
#[derive(ToSchema)]
#[schema(as = LocationModel, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LocationModelSchema {
    #[schema(example = "Atlanta Convention Center")]
    venue_name: Option<String>,
    address1: Option<String>,
    address2: Option<String>,
    address3: Option<String>,
    city_town: Option<String>,
    state_province: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

/// OpenAPI schema for [`crate::domain::CampModel`].
///
/// `venue` and the `location*` fields flatten the camp's location. A nested
/// `location` is accepted on writes; flattened fields win when both are
/// sent. `talks` is only populated on reads that ask for it and is ignored
/// on writes.
#[derive(ToSchema)]
#[schema(as = CampModel, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CampModelSchema {
    #[schema(example = "ATL2018")]
    moniker: Option<String>,
    #[schema(example = "Atlanta Code Camp")]
    name: Option<String>,
    description: Option<String>,
    #[schema(format = Date, example = "2018-10-18")]
    event_date: Option<String>,
    #[schema(example = 1, minimum = 1, maximum = 100)]
    length: Option<i32>,
    #[schema(example = "Atlanta Convention Center")]
    venue: Option<String>,
    location_address1: Option<String>,
    location_address2: Option<String>,
    location_address3: Option<String>,
    location_city_town: Option<String>,
    location_state_province: Option<String>,
    location_postal_code: Option<String>,
    location_country: Option<String>,
    #[schema(write_only)]
    location: Option<LocationModelSchema>,
    talks: Vec<TalkModelSchema>,
}
