//! Extractor configuration for inbound HTTP adapters.
//!
//! Actix rejects malformed bodies, query strings and path segments before a
//! handler runs. These handlers turn those rejections into the same
//! `invalid_request` envelope the use-cases produce.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::Error;

/// Which part of the request could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RejectedPart {
    Body,
    Query,
    Path,
}

impl RejectedPart {
    fn as_str(self) -> &'static str {
        match self {
            RejectedPart::Body => "body",
            RejectedPart::Query => "query",
            RejectedPart::Path => "path",
        }
    }

    fn message(self) -> &'static str {
        match self {
            RejectedPart::Body => "Request body is not valid JSON for this resource",
            RejectedPart::Query => "Query string could not be parsed",
            RejectedPart::Path => "Path parameter could not be parsed",
        }
    }
}

pub(crate) fn rejection(part: RejectedPart, reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(part.message()).with_details(json!({
        "source": part.as_str(),
        "code": "malformed_request",
        "reason": reason.to_string(),
    }))
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejection(RejectedPart::Body, err).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejection(RejectedPart::Query, err).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    rejection(RejectedPart::Path, err).into()
}

/// JSON body extractor settings.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Query string extractor settings.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

/// Path segment extractor settings.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}
