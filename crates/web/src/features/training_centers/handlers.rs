use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::training_center::{
    CreateTrainingCenterRequest, TrainingCenterResponse, UpdateTrainingCenterRequest,
};
use uuid::Uuid;
use validator::Validate;

use crate::SharedStore;
use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath};

use super::services;

#[utoipa::path(
    get,
    path = "/api/training-centers",
    responses(
        (status = 200, description = "List all training centers successfully", body = Vec<TrainingCenterResponse>)
    ),
    tag = "training-centers"
)]
pub async fn list_training_centers(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<TrainingCenterResponse>>, WebError> {
    let centers = services::list_training_centers(store.as_ref()).await?;

    Ok(Json(centers))
}

#[utoipa::path(
    get,
    path = "/api/training-centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "training-centers"
)]
pub async fn get_training_center(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let center = services::get_training_center(store.as_ref(), id).await?;

    Ok(Json(center).into_response())
}

#[utoipa::path(
    post,
    path = "/api/training-centers",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = TrainingCenterResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Training center name already exists")
    ),
    tag = "training-centers"
)]
pub async fn create_training_center(
    State(store): State<SharedStore>,
    ApiJson(req): ApiJson<CreateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let center = services::create_training_center(store.as_ref(), req).await?;

    Ok((StatusCode::CREATED, Json(center)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/training-centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    request_body = UpdateTrainingCenterRequest,
    responses(
        (status = 200, description = "Training center updated successfully", body = TrainingCenterResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Training center not found"),
        (status = 409, description = "Training center name already exists")
    ),
    tag = "training-centers"
)]
pub async fn update_training_center(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(update_req): ApiJson<UpdateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_training_center(store.as_ref(), id, update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/training-centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 204, description = "Training center deleted successfully"),
        (status = 404, description = "Training center not found"),
        (status = 409, description = "Training center is still referenced by athletes")
    ),
    tag = "training-centers"
)]
pub async fn delete_training_center(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    services::delete_training_center(store.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
