use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::funkos::dtos::{CreateFunkoDto, FunkoResponseDto, UpdateFunkoDto};
use crate::features::funkos::services::FunkoService;

/// List all funkos
#[utoipa::path(
    get,
    path = "/api/funkos",
    responses(
        (status = 200, description = "List of funkos", body = Vec<FunkoResponseDto>),
    ),
    tag = "funkos"
)]
pub async fn find_all_funkos(
    State(service): State<Arc<FunkoService>>,
) -> Result<Json<Vec<FunkoResponseDto>>> {
    Ok(Json(service.find_all().await?))
}

/// Get funko by ID
#[utoipa::path(
    get,
    path = "/api/funkos/{id}",
    params(
        ("id" = i64, Path, description = "Funko ID")
    ),
    responses(
        (status = 200, description = "Funko found", body = FunkoResponseDto),
        (status = 404, description = "Funko not found")
    ),
    tag = "funkos"
)]
pub async fn find_one_funko(
    State(service): State<Arc<FunkoService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<FunkoResponseDto>> {
    Ok(Json(service.find_one(id).await?))
}

/// Create a funko
#[utoipa::path(
    post,
    path = "/api/funkos",
    request_body = CreateFunkoDto,
    responses(
        (status = 201, description = "Funko created", body = FunkoResponseDto),
        (status = 400, description = "Validation error or unknown category")
    ),
    tag = "funkos"
)]
pub async fn create_funko(
    State(service): State<Arc<FunkoService>>,
    AppJson(dto): AppJson<CreateFunkoDto>,
) -> Result<(StatusCode, Json<FunkoResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let funko = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(funko)))
}

/// Update a funko
#[utoipa::path(
    put,
    path = "/api/funkos/{id}",
    params(
        ("id" = i64, Path, description = "Funko ID")
    ),
    request_body = UpdateFunkoDto,
    responses(
        (status = 200, description = "Funko updated", body = FunkoResponseDto),
        (status = 400, description = "Validation error or unknown category"),
        (status = 404, description = "Funko not found")
    ),
    tag = "funkos"
)]
pub async fn update_funko(
    State(service): State<Arc<FunkoService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateFunkoDto>,
) -> Result<Json<FunkoResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(Json(service.update(id, dto).await?))
}

/// Delete a funko (soft delete)
#[utoipa::path(
    delete,
    path = "/api/funkos/{id}",
    params(
        ("id" = i64, Path, description = "Funko ID")
    ),
    responses(
        (status = 204, description = "Funko marked as deleted"),
        (status = 404, description = "Funko not found")
    ),
    tag = "funkos"
)]
pub async fn delete_funko(
    State(service): State<Arc<FunkoService>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode> {
    service.is_deleted_to_true(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
