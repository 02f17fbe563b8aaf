//! Checkout, transaction lookup and the daily report.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use cashier_core::validation::validate_checkout_items;
use cashier_core::{CheckoutRequest, Report, Transaction};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// `POST /api/transactions/checkout`
///
/// ```text
/// {"items":[{"product_id":1,"quantity":2}]}
///      │
///      ├── malformed JSON          → 400 "Invalid request body"
///      ├── empty / bad quantities  → 400
///      ├── unknown product         → 404, nothing written
///      ├── insufficient stock      → 422, nothing written
///      ├── total overflows i64     → 422, nothing written
///      ▼
/// 200 {"status":true,"message":"Checkout","data":{transaction}}
/// ```
pub async fn checkout(
    State(state): State<AppState>,
    body: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Transaction>>, ApiError> {
    let Json(request) = body.map_err(|_| ApiError::bad_request("Invalid request body"))?;
    validate_checkout_items(&request.items)?;

    let transaction = state
        .db
        .transactions()
        .checkout(&request.items, state.policy)
        .await?;

    info!(
        id = transaction.id,
        total = %transaction.total(),
        "Checkout completed"
    );
    Ok(Json(ApiResponse::ok("Checkout", transaction)))
}

/// `GET /api/transactions/report`
pub async fn report(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Report>>, ApiError> {
    let report = state.db.transactions().report().await?;
    Ok(Json(ApiResponse::ok("Get Report", report)))
}

/// `GET /api/transactions/{id}`
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<Transaction>>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::bad_request("Invalid transaction ID"))?;
    let transaction = state.db.transactions().get_by_id(id).await?;
    Ok(Json(ApiResponse::ok("Get Transaction", transaction)))
}
