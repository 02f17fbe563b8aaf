//! Product endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use cashier_core::validation::{validate_new_product, validate_search_query};
use cashier_core::{NewProduct, Product};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query string of `GET /api/products`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub name: Option<String>,
}

fn product_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|_| ApiError::bad_request("Invalid product ID"))
}

fn product_body(body: Result<Json<NewProduct>, JsonRejection>) -> Result<NewProduct, ApiError> {
    let Json(product) = body.map_err(|_| ApiError::bad_request("Invalid request"))?;
    validate_new_product(&product)?;

    Ok(NewProduct {
        name: product.name.trim().to_string(),
        ..product
    })
}

/// `GET /api/products[?name=...]`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let name = validate_search_query(query.name.as_deref())?;
    let products = state.db.products().list(name.as_deref()).await?;
    Ok(Json(ApiResponse::ok("Get All Product", products)))
}

/// `POST /api/products`
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), ApiError> {
    let product = product_body(body)?;
    let created = state.db.products().insert(&product).await?;

    info!(id = created.id, name = %created.name, "Product created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Create Product", created)),
    ))
}

/// `GET /api/products/{id}`
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = state.db.products().get_by_id(product_id(id)?).await?;
    Ok(Json(ApiResponse::ok("Get Product", product)))
}

/// `PUT /api/products/{id}`
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let id = product_id(id)?;
    let product = product_body(body)?;
    let updated = state.db.products().update(id, &product).await?;

    info!(id, "Product updated");
    Ok(Json(ApiResponse::ok("Update Product", updated)))
}

/// `DELETE /api/products/{id}`
///
/// Products that appear in transaction history answer 409.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = product_id(id)?;
    state.db.products().delete(id).await?;

    info!(id, "Product deleted");
    Ok(Json(ApiResponse::message("Success delete product")))
}
