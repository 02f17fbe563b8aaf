//! # cashier-api: REST API for the Cashier Backend
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /api/health                                                     │
//! │                                                                         │
//! │  GET    /api/categories            POST   /api/categories               │
//! │  GET    /api/categories/{id}       PUT    /api/categories/{id}          │
//! │  DELETE /api/categories/{id}                                            │
//! │                                                                         │
//! │  GET    /api/products[?name=]      POST   /api/products                 │
//! │  GET    /api/products/{id}         PUT    /api/products/{id}            │
//! │  DELETE /api/products/{id}                                              │
//! │                                                                         │
//! │  POST   /api/transactions/checkout                                      │
//! │  GET    /api/transactions/report                                        │
//! │  GET    /api/transactions/{id}                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every answer uses the [`response::ApiResponse`] envelope. Methods not
//! listed answer 405.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{category, health, product, transaction};
pub use crate::state::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/categories", get(category::list).post(category::create))
        .route(
            "/api/categories/{id}",
            get(category::get)
                .put(category::update)
                .delete(category::delete),
        )
        .route("/api/products", get(product::list).post(product::create))
        .route(
            "/api/products/{id}",
            get(product::get).put(product::update).delete(product::delete),
        )
        .route("/api/transactions/checkout", post(transaction::checkout))
        .route("/api/transactions/report", get(transaction::report))
        .route("/api/transactions/{id}", get(transaction::get))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
