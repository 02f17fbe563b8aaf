//! Category endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use cashier_core::validation::validate_new_category;
use cashier_core::{Category, NewCategory};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

fn category_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|_| ApiError::bad_request("Invalid category ID"))
}

fn category_body(body: Result<Json<NewCategory>, JsonRejection>) -> Result<NewCategory, ApiError> {
    let Json(category) = body.map_err(|_| ApiError::bad_request("Invalid request"))?;
    validate_new_category(&category)?;

    Ok(NewCategory {
        name: category.name.trim().to_string(),
        description: category.description,
    })
}

/// `GET /api/categories`
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.db.categories().list().await?;
    Ok(Json(ApiResponse::ok("Get All Category", categories)))
}

/// `POST /api/categories`
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewCategory>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    let category = category_body(body)?;
    let created = state.db.categories().insert(&category).await?;

    info!(id = created.id, "Category created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Create category", created)),
    ))
}

/// `GET /api/categories/{id}`
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state.db.categories().get_by_id(category_id(id)?).await?;
    Ok(Json(ApiResponse::ok("Get Category", category)))
}

/// `PUT /api/categories/{id}`
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<NewCategory>, JsonRejection>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let id = category_id(id)?;
    let category = category_body(body)?;
    let updated = state.db.categories().update(id, &category).await?;

    info!(id, "Category updated");
    Ok(Json(ApiResponse::ok("Update Category", updated)))
}

/// `DELETE /api/categories/{id}`
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = category_id(id)?;
    state.db.categories().delete(id).await?;

    info!(id, "Category deleted");
    Ok(Json(ApiResponse::message("Success delete category")))
}
