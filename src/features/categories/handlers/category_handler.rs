use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;

/// List all categories
#[utoipa::path(
    get,
    path = "/api/category",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn find_all_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.find_all().await?;
    Ok(Json(categories))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/api/category/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn find_one_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.find_one(id).await?;
    Ok(Json(category))
}

/// Create a category
///
/// A name that matches a soft-deleted category (ignoring case) reactivates
/// that category instead of creating a new one.
#[utoipa::path(
    post,
    path = "/api/category",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created or reactivated", body = CategoryResponseDto),
        (status = 400, description = "Validation error or an active category already uses the name")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category
///
/// When the new name belongs to a soft-deleted category, that category is
/// reactivated and the response has an empty body.
#[utoipa::path(
    put,
    path = "/api/category/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponseDto),
        (status = 400, description = "Validation error or an active category already uses the name"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    match service.update(id, dto).await? {
        Some(category) => Ok(Json(category).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// Delete a category (soft delete)
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deactivated"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode> {
    service.change_is_active(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Permanently remove a category
#[utoipa::path(
    delete,
    path = "/api/category/{id}/purge",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category removed", body = CategoryResponseDto),
        (status = 400, description = "Category is still referenced by funkos"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn purge_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.remove(id).await?;
    Ok(Json(category))
}
