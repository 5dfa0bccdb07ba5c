//! HTTP API server for taxi-fleet.

#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

pub mod api_error;
mod handlers;
mod response_types;

use axum::{
    Json, Router,
    routing::{delete, get, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use taxi_fleet_storage::StorageBackend;

pub use response_types::{
    ApiDocsResponse, EndpointDoc, ParamDoc, ResponseDoc, ResultResponse, VersionResponse,
};

/// Shared application state for all HTTP handlers.
///
/// Owns the one fleet backend picked at startup. Wrapped in `Arc` for sharing
/// across handlers.
pub struct AppState {
    /// Backend every fleet route reads from and writes to
    pub store: StorageBackend,
}

impl AppState {
    #[must_use]
    pub fn new(store: StorageBackend) -> Self {
        Self { store }
    }
}

/// Fleet CRUD routes, mounted under both `/fleet` and the legacy `/api/taxis`.
fn fleet_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::fleet::list_taxis).post(handlers::fleet::create_taxi))
        .route("/reset", delete(handlers::fleet::reset_fleet))
        .route("/status/{status}", get(handlers::fleet::list_taxis_by_status))
        .route("/{id}", put(handlers::fleet::update_taxi).delete(handlers::fleet::delete_taxi))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/docs", get(api_docs))
        .nest("/fleet", fleet_routes())
        .nest("/api/taxis", fleet_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

async fn api_docs() -> Json<ApiDocsResponse> {
    Json(handlers::api_docs::get_fleet_docs())
}
