use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};
use chairtime_core::errors::BookingError;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct VersionResponse {
    version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness probe: a liveness answer is not enough for load balancers, so
/// this one round-trips the database.
async fn readiness_check(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .map_err(|e| BookingError::Database(e.into()))?;

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
    }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .route("/version", get(version))
}
