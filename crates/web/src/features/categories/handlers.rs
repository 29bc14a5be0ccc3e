use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::category::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use uuid::Uuid;
use validator::Validate;

use crate::SharedStore;
use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath};

use super::services;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List all categories successfully", body = Vec<CategoryResponse>)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<CategoryResponse>>, WebError> {
    let categories = services::list_categories(store.as_ref()).await?;

    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let category = services::get_category(store.as_ref(), id).await?;

    Ok(Json(category).into_response())
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Category name already exists")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(store): State<SharedStore>,
    ApiJson(req): ApiJson<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::create_category(store.as_ref(), req).await?;

    Ok((StatusCode::CREATED, Json(category)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category id")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category name already exists")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(update_req): ApiJson<UpdateCategoryRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_category(store.as_ref(), id, update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category id")
    ),
    responses(
        (status = 204, description = "Category deleted successfully"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category is still referenced by athletes")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    services::delete_category(store.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
