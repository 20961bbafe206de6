//! Staff barber roster handlers. Deleting a barber also removes their
//! appointment and payment history in one transaction.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use chairtime_core::{
    errors::BookingError,
    models::barber::{Barber, CreateBarberRequest, UpdateBarberRequest},
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

fn to_barber(db: chairtime_db::models::DbBarber) -> Barber {
    Barber {
        id: db.id,
        name: db.name,
        email: db.email,
        phone: db.phone,
        specialty: db.specialty,
        created_at: db.created_at,
    }
}

fn validate_barber(name: &str, email: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Barber name must not be empty".to_string(),
        )));
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err(AppError(BookingError::Validation(
            "A valid email address is required".to_string(),
        )));
    }
    Ok(())
}

async fn require_barber(state: &ApiState, shop_id: Uuid, barber_id: Uuid) -> Result<(), AppError> {
    chairtime_db::repositories::barber::get_barber_by_id(&state.db_pool, shop_id, barber_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Barber with ID {} not found", barber_id)))?;
    Ok(())
}

#[axum::debug_handler]
pub async fn list_barbers(
    State(state): State<Arc<ApiState>>,
    Path(shop_id): Path<Uuid>,
) -> Result<Json<Vec<Barber>>, AppError> {
    chairtime_db::repositories::barbershop::get_barbershop_by_id(&state.db_pool, shop_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Barbershop with ID {} not found", shop_id))
        })?;

    let barbers = chairtime_db::repositories::barber::list_barbers(&state.db_pool, shop_id)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(barbers.into_iter().map(to_barber).collect()))
}

#[axum::debug_handler]
pub async fn create_barber(
    State(state): State<Arc<ApiState>>,
    Path(shop_id): Path<Uuid>,
    Json(payload): Json<CreateBarberRequest>,
) -> Result<Json<Barber>, AppError> {
    validate_barber(&payload.name, &payload.email)?;

    chairtime_db::repositories::barbershop::get_barbershop_by_id(&state.db_pool, shop_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Barbershop with ID {} not found", shop_id))
        })?;

    let barber = chairtime_db::repositories::barber::create_barber(
        &state.db_pool,
        shop_id,
        &payload.name,
        &payload.email,
        payload.phone.as_deref(),
        payload.specialty.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(to_barber(barber)))
}

#[axum::debug_handler]
pub async fn update_barber(
    State(state): State<Arc<ApiState>>,
    Path((shop_id, barber_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateBarberRequest>,
) -> Result<Json<Barber>, AppError> {
    validate_barber(&payload.name, &payload.email)?;
    require_barber(&state, shop_id, barber_id).await?;

    let barber = chairtime_db::repositories::barber::update_barber(
        &state.db_pool,
        shop_id,
        barber_id,
        &payload.name,
        &payload.email,
        payload.phone.as_deref(),
        payload.specialty.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(to_barber(barber)))
}

#[axum::debug_handler]
pub async fn delete_barber(
    State(state): State<Arc<ApiState>>,
    Path((shop_id, barber_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    require_barber(&state, shop_id, barber_id).await?;

    chairtime_db::repositories::barber::delete_barber_and_related(
        &state.db_pool,
        shop_id,
        barber_id,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(StatusCode::NO_CONTENT)
}
