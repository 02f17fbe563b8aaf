use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::response::ApiResponse;
use crate::state::AppState;

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<()>>) {
    if state.db.health_check().await {
        (StatusCode::OK, Json(ApiResponse::message("API Running")))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error("Database unavailable")),
        )
    }
}
