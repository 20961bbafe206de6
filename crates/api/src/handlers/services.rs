//! Staff service catalog handlers. The staff listing includes inactive
//! services; only the public profile filters them out.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use chairtime_core::{
    errors::BookingError,
    models::service::{
        CreateServiceRequest, Service, SetServiceActiveRequest, UpdateServiceRequest,
    },
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

fn to_service(db: chairtime_db::models::DbService) -> Service {
    Service {
        id: db.id,
        name: db.name,
        duration_minutes: db.duration_minutes,
        price: db.price,
        description: db.description,
        is_active: db.is_active,
        created_at: db.created_at,
    }
}

fn validate_service(name: &str, duration_minutes: i32, price: f64) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Service name must not be empty".to_string(),
        )));
    }
    if duration_minutes <= 0 {
        return Err(AppError(BookingError::Validation(
            "Service duration must be a positive number of minutes".to_string(),
        )));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(AppError(BookingError::Validation(
            "Service price must not be negative".to_string(),
        )));
    }
    Ok(())
}

async fn require_shop(state: &ApiState, shop_id: Uuid) -> Result<(), AppError> {
    chairtime_db::repositories::barbershop::get_barbershop_by_id(&state.db_pool, shop_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Barbershop with ID {} not found", shop_id))
        })?;
    Ok(())
}

async fn require_service(
    state: &ApiState,
    shop_id: Uuid,
    service_id: Uuid,
) -> Result<(), AppError> {
    chairtime_db::repositories::service::get_service_by_id(&state.db_pool, shop_id, service_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Service with ID {} not found", service_id))
        })?;
    Ok(())
}

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
    Path(shop_id): Path<Uuid>,
) -> Result<Json<Vec<Service>>, AppError> {
    require_shop(&state, shop_id).await?;

    let services =
        chairtime_db::repositories::service::list_services(&state.db_pool, shop_id, false)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(services.into_iter().map(to_service).collect()))
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    Path(shop_id): Path<Uuid>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    validate_service(&payload.name, payload.duration_minutes, payload.price)?;
    require_shop(&state, shop_id).await?;

    let service = chairtime_db::repositories::service::create_service(
        &state.db_pool,
        shop_id,
        &payload.name,
        payload.duration_minutes,
        payload.price,
        payload.description.as_deref(),
        payload.is_active,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(to_service(service)))
}

#[axum::debug_handler]
pub async fn update_service(
    State(state): State<Arc<ApiState>>,
    Path((shop_id, service_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    validate_service(&payload.name, payload.duration_minutes, payload.price)?;
    require_service(&state, shop_id, service_id).await?;

    let service = chairtime_db::repositories::service::update_service(
        &state.db_pool,
        shop_id,
        service_id,
        &payload.name,
        payload.duration_minutes,
        payload.price,
        payload.description.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(to_service(service)))
}

#[axum::debug_handler]
pub async fn set_service_active(
    State(state): State<Arc<ApiState>>,
    Path((shop_id, service_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<SetServiceActiveRequest>,
) -> Result<Json<Service>, AppError> {
    require_service(&state, shop_id, service_id).await?;

    let service = chairtime_db::repositories::service::set_service_active(
        &state.db_pool,
        shop_id,
        service_id,
        payload.is_active,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(to_service(service)))
}

#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<Arc<ApiState>>,
    Path((shop_id, service_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    require_service(&state, shop_id, service_id).await?;

    chairtime_db::repositories::service::delete_service(&state.db_pool, shop_id, service_id)
        .await
        .map_err(BookingError::Database)?;

    Ok(StatusCode::NO_CONTENT)
}
