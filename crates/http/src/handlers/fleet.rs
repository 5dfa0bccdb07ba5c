use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

use taxi_fleet_core::{NewTaxi, Taxi, TaxiId, TaxiPatch};
use taxi_fleet_storage::FleetStore;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::ResultResponse;

pub async fn list_taxis(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Taxi>>, ApiError> {
    Ok(Json(state.store.list_all().await?))
}

pub async fn list_taxis_by_status(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Taxi>>, ApiError> {
    Ok(Json(state.store.list_by_status(&status).await?))
}

pub async fn create_taxi(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewTaxi>, JsonRejection>,
) -> Result<(StatusCode, Json<Taxi>), ApiError> {
    let Json(input) = body?;
    let taxi = state.store.create(input).await?;
    tracing::info!(id = taxi.id, number = %taxi.number, "taxi created");
    Ok((StatusCode::CREATED, Json(taxi)))
}

/// A malformed body is rejected before the identity is looked up, so a bad
/// request against an unknown id answers 400 rather than 404.
pub async fn update_taxi(
    State(state): State<Arc<AppState>>,
    id: Result<Path<TaxiId>, PathRejection>,
    body: Result<Json<TaxiPatch>, JsonRejection>,
) -> Result<Json<Taxi>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let taxi = state.store.update(id, patch).await?;
    tracing::info!(id, status = %taxi.status, "taxi updated");
    Ok(Json(taxi))
}

pub async fn delete_taxi(
    State(state): State<Arc<AppState>>,
    id: Result<Path<TaxiId>, PathRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let Path(id) = id?;
    if let Err(e) = state.store.delete(id).await {
        if e.is_not_found() {
            tracing::warn!(id, "delete of unknown taxi");
        }
        return Err(e.into());
    }
    tracing::info!(id, "taxi deleted");
    Ok(Json(ResultResponse { result: true }))
}

pub async fn reset_fleet(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResultResponse>, ApiError> {
    state.store.reset().await?;
    tracing::info!(backend = state.store.kind(), "fleet reset");
    Ok(Json(ResultResponse { result: true }))
}
