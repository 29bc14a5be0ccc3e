use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::athlete::{
    AthleteListParams, AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest,
};
use uuid::Uuid;
use validator::Validate;

use crate::SharedStore;
use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    params(AthleteListParams),
    responses(
        (status = 200, description = "List athletes successfully", body = Vec<AthleteResponse>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(store): State<SharedStore>,
    ApiQuery(params): ApiQuery<AthleteListParams>,
) -> Result<Json<Vec<AthleteResponse>>, WebError> {
    let athletes = services::list_athletes(store.as_ref(), params.into()).await?;

    Ok(Json(athletes))
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(store.as_ref(), id).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error or unknown category / training center"),
        (status = 409, description = "Tax id already registered")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(store): State<SharedStore>,
    ApiJson(req): ApiJson<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(store.as_ref(), req).await?;

    Ok((StatusCode::CREATED, Json(athlete)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Athlete not found"),
        (status = 409, description = "Tax id already registered")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(update_req): ApiJson<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_athlete(store.as_ref(), id, update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    services::delete_athlete(store.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
