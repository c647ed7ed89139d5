//! Talk HTTP handlers, nested under their camp.
//!
//! ```text
//! GET    /api/camps/{moniker}/talks
//! GET    /api/camps/{moniker}/talks/{talkId}
//! POST   /api/camps/{moniker}/talks
//! PUT    /api/camps/{moniker}/talks
//! DELETE /api/camps/{moniker}/talks/{talkId}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::TalkModel;
use crate::domain::ports::{
    CreateTalkRequest, DeleteTalkRequest, GetTalkRequest, ListTalksRequest, UpdateTalkRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, TalkModelSchema};
use crate::inbound::http::state::HttpState;

/// List a camp's talks with their speakers.
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}/talks",
    params(("moniker" = String, Path, description = "Camp moniker")),
    responses(
        (status = 200, description = "Talks", body = [TalkModelSchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["talks"],
    operation_id = "listTalks"
)]
#[get("/camps/{moniker}/talks")]
pub async fn list_talks(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<TalkModel>>> {
    let talks = state
        .talks
        .list_talks(ListTalksRequest {
            moniker: path.into_inner(),
        })
        .await?;
    Ok(web::Json(talks))
}

/// Fetch one talk of a camp.
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}/talks/{talkId}",
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("talkId" = i32, Path, description = "Talk identifier")
    ),
    responses(
        (status = 200, description = "Talk", body = TalkModelSchema),
        (status = 400, description = "Talk not found for this camp", body = ErrorSchema)
    ),
    tags = ["talks"],
    operation_id = "getTalk"
)]
#[get("/camps/{moniker}/talks/{talk_id}")]
pub async fn get_talk(
    state: web::Data<HttpState>,
    path: web::Path<(String, i32)>,
) -> ApiResult<web::Json<TalkModel>> {
    let (moniker, talk_id) = path.into_inner();
    let talk = state
        .talks
        .get_talk(GetTalkRequest { moniker, talk_id })
        .await?;
    Ok(web::Json(talk))
}

/// Add a talk to a camp. The body must reference an existing speaker.
#[utoipa::path(
    post,
    path = "/api/camps/{moniker}/talks",
    params(("moniker" = String, Path, description = "Camp moniker")),
    request_body = TalkModelSchema,
    responses(
        (status = 201, description = "Talk created", body = TalkModelSchema,
            headers(("Location" = String, description = "URI of the new talk"))),
        (status = 400, description = "Unknown camp or speaker, or invalid talk",
            body = ErrorSchema)
    ),
    tags = ["talks"],
    operation_id = "createTalk"
)]
#[post("/camps/{moniker}/talks")]
pub async fn create_talk(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<TalkModel>,
) -> ApiResult<HttpResponse> {
    let created = state
        .talks_command
        .create_talk(CreateTalkRequest {
            moniker: path.into_inner(),
            talk: payload.into_inner(),
        })
        .await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, created.location.into_string()))
        .json(created.representation))
}

/// Merge the supplied fields into the talk named by `talkId` in the body.
#[utoipa::path(
    put,
    path = "/api/camps/{moniker}/talks",
    params(("moniker" = String, Path, description = "Camp moniker")),
    request_body = TalkModelSchema,
    responses(
        (status = 200, description = "Talk updated", body = TalkModelSchema),
        (status = 400, description = "Missing talkId, invalid fields or nothing changed",
            body = ErrorSchema),
        (status = 404, description = "Talk not found", body = ErrorSchema)
    ),
    tags = ["talks"],
    operation_id = "updateTalk"
)]
#[put("/camps/{moniker}/talks")]
pub async fn update_talk(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<TalkModel>,
) -> ApiResult<web::Json<TalkModel>> {
    let talk = state
        .talks_command
        .update_talk(UpdateTalkRequest {
            moniker: path.into_inner(),
            talk: payload.into_inner(),
        })
        .await?;
    Ok(web::Json(talk))
}

/// Delete one talk of a camp.
#[utoipa::path(
    delete,
    path = "/api/camps/{moniker}/talks/{talkId}",
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("talkId" = i32, Path, description = "Talk identifier")
    ),
    responses(
        (status = 200, description = "Talk deleted"),
        (status = 404, description = "Talk not found", body = ErrorSchema),
        (status = 400, description = "Nothing was deleted", body = ErrorSchema)
    ),
    tags = ["talks"],
    operation_id = "deleteTalk"
)]
#[delete("/camps/{moniker}/talks/{talk_id}")]
pub async fn delete_talk(
    state: web::Data<HttpState>,
    path: web::Path<(String, i32)>,
) -> ApiResult<HttpResponse> {
    let (moniker, talk_id) = path.into_inner();
    state
        .talks_command
        .delete_talk(DeleteTalkRequest { moniker, talk_id })
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "talks_tests.rs"]
mod tests;
