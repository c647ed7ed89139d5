//! Camp HTTP handlers.
//!
//! ```text
//! GET    /api/camps?includeTalks=
//! GET    /api/camps/search?date=&includeTalks=
//! GET    /api/camps/{moniker}
//! POST   /api/camps
//! PUT    /api/camps/{moniker}
//! DELETE /api/camps/{moniker}
//! ```
//!
//! `search_camps` must be registered before `get_camp`, otherwise
//! `/camps/search` is captured as a moniker.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::CampModel;
use crate::domain::ports::{
    CreateCampRequest, DeleteCampRequest, GetCampRequest, ListCampsRequest, SearchCampsRequest,
    UpdateCampRequest,
};
use crate::domain::validation::missing_field;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CampModelSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Query parameters accepted by the camp listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct ListCampsQuery {
    /// Embed each camp's talks.
    pub include_talks: bool,
}

/// Query parameters accepted by the date search.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct SearchCampsQuery {
    /// Event date (`YYYY-MM-DD`). `theDate` is accepted as an alias.
    #[serde(alias = "theDate")]
    #[param(value_type = String, format = Date, example = "2018-10-18")]
    pub date: Option<NaiveDate>,
    /// Embed each camp's talks.
    pub include_talks: bool,
}

/// List every camp ordered by event date.
#[utoipa::path(
    get,
    path = "/api/camps",
    params(ListCampsQuery),
    responses(
        (status = 200, description = "Camps", body = [CampModelSchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["camps"],
    operation_id = "listCamps"
)]
#[get("/camps")]
pub async fn list_camps(
    state: web::Data<HttpState>,
    query: web::Query<ListCampsQuery>,
) -> ApiResult<web::Json<Vec<CampModel>>> {
    let camps = state
        .camps
        .list_camps(ListCampsRequest {
            include_talks: query.include_talks,
        })
        .await?;
    Ok(web::Json(camps))
}

/// Find the camps held on a date.
#[utoipa::path(
    get,
    path = "/api/camps/search",
    params(SearchCampsQuery),
    responses(
        (status = 200, description = "Camps on the date", body = [CampModelSchema]),
        (status = 400, description = "Missing or malformed date", body = ErrorSchema),
        (status = 404, description = "No camp on the date", body = ErrorSchema)
    ),
    tags = ["camps"],
    operation_id = "searchCamps"
)]
#[get("/camps/search")]
pub async fn search_camps(
    state: web::Data<HttpState>,
    query: web::Query<SearchCampsQuery>,
) -> ApiResult<web::Json<Vec<CampModel>>> {
    let SearchCampsQuery {
        date,
        include_talks,
    } = query.into_inner();
    let date = date.ok_or_else(|| missing_field("date"))?;
    let camps = state
        .camps
        .search_camps(SearchCampsRequest {
            date,
            include_talks,
        })
        .await?;
    Ok(web::Json(camps))
}

/// Fetch a camp by moniker.
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}",
    params(("moniker" = String, Path, description = "Camp moniker")),
    responses(
        (status = 200, description = "Camp", body = CampModelSchema),
        (status = 404, description = "Camp not found", body = ErrorSchema)
    ),
    tags = ["camps"],
    operation_id = "getCamp"
)]
#[get("/camps/{moniker}")]
pub async fn get_camp(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CampModel>> {
    let camp = state
        .camps
        .get_camp(GetCampRequest {
            moniker: path.into_inner(),
        })
        .await?;
    Ok(web::Json(camp))
}

/// Create a camp.
///
/// # Examples
/// ```no_run
/// use actix_web::{HttpResponse, web};
/// use camps_backend::domain::CampModel;
/// use camps_backend::inbound::http::camps::create_camp;
/// use camps_backend::inbound::http::{ApiResult, state::HttpState};
///
/// async fn call_handler(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
///     let body = web::Json(CampModel {
///         moniker: Some("ATL2024".to_owned()),
///         name: Some("Atlanta Code Camp".to_owned()),
///         event_date: chrono::NaiveDate::from_ymd_opt(2024, 10, 12),
///         ..CampModel::default()
///     });
///     create_camp(state, body).await
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/camps",
    request_body = CampModelSchema,
    responses(
        (status = 201, description = "Camp created", body = CampModelSchema,
            headers(("Location" = String, description = "URI of the new camp"))),
        (status = 400, description = "Invalid camp or duplicate moniker", body = ErrorSchema)
    ),
    tags = ["camps"],
    operation_id = "createCamp"
)]
#[post("/camps")]
pub async fn create_camp(
    state: web::Data<HttpState>,
    payload: web::Json<CampModel>,
) -> ApiResult<HttpResponse> {
    let created = state
        .camps_command
        .create_camp(CreateCampRequest {
            camp: payload.into_inner(),
        })
        .await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, created.location.into_string()))
        .json(created.representation))
}

/// Merge the supplied fields into an existing camp.
#[utoipa::path(
    put,
    path = "/api/camps/{moniker}",
    params(("moniker" = String, Path, description = "Camp moniker")),
    request_body = CampModelSchema,
    responses(
        (status = 200, description = "Camp updated", body = CampModelSchema),
        (status = 400, description = "Unknown camp, invalid fields or nothing changed",
            body = ErrorSchema)
    ),
    tags = ["camps"],
    operation_id = "updateCamp"
)]
#[put("/camps/{moniker}")]
pub async fn update_camp(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CampModel>,
) -> ApiResult<web::Json<CampModel>> {
    let camp = state
        .camps_command
        .update_camp(UpdateCampRequest {
            moniker: path.into_inner(),
            camp: payload.into_inner(),
        })
        .await?;
    Ok(web::Json(camp))
}

/// Delete a camp and its talks.
#[utoipa::path(
    delete,
    path = "/api/camps/{moniker}",
    params(("moniker" = String, Path, description = "Camp moniker")),
    responses(
        (status = 200, description = "Camp deleted"),
        (status = 400, description = "Unknown camp", body = ErrorSchema)
    ),
    tags = ["camps"],
    operation_id = "deleteCamp"
)]
#[delete("/camps/{moniker}")]
pub async fn delete_camp(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state
        .camps_command
        .delete_camp(DeleteCampRequest {
            moniker: path.into_inner(),
        })
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "camps_tests.rs"]
mod tests;
