//! Weekly availability handlers. The week is stored as one row per weekday
//! (0 = Sunday through 6 = Saturday) with breaks embedded in the row, and
//! updated as a bulk upsert so the dashboard can save the whole grid at once.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use chairtime_core::{
    errors::BookingError,
    models::availability::{AvailabilityResponse, DayAvailability, UpdateAvailabilityRequest},
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

fn to_day(db: chairtime_db::models::DbDayAvailability) -> DayAvailability {
    DayAvailability {
        day_of_week: db.day_of_week,
        start_time: db.start_time,
        end_time: db.end_time,
        is_active: db.is_active,
        breaks: db.breaks.0,
    }
}

fn validate_day(day: &DayAvailability) -> Result<(), AppError> {
    if !(0..=6).contains(&day.day_of_week) {
        return Err(AppError(BookingError::Validation(format!(
            "day_of_week must be between 0 and 6, got {}",
            day.day_of_week
        ))));
    }
    if day.end_time <= day.start_time {
        return Err(AppError(BookingError::Validation(format!(
            "Closing time must be after opening time on day {}",
            day.day_of_week
        ))));
    }
    for b in &day.breaks {
        if b.end <= b.start {
            return Err(AppError(BookingError::Validation(format!(
                "Break end must be after break start on day {}",
                day.day_of_week
            ))));
        }
        if b.start < day.start_time || b.end > day.end_time {
            return Err(AppError(BookingError::Validation(format!(
                "Breaks must fall within the operating window on day {}",
                day.day_of_week
            ))));
        }
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

#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(shop_id): Path<Uuid>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    require_shop(&state, shop_id).await?;

    let days = chairtime_db::repositories::availability::get_week(&state.db_pool, shop_id)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(AvailabilityResponse {
        days: days.into_iter().map(to_day).collect(),
    }))
}

#[axum::debug_handler]
pub async fn update_availability(
    State(state): State<Arc<ApiState>>,
    Path(shop_id): Path<Uuid>,
    Json(payload): Json<UpdateAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    // Validate the whole submission before writing anything; the upsert
    // itself is one transaction, so the week is saved entirely or not at all.
    for day in &payload.days {
        validate_day(day)?;
    }

    require_shop(&state, shop_id).await?;

    chairtime_db::repositories::availability::upsert_week(&state.db_pool, shop_id, &payload.days)
        .await
        .map_err(BookingError::Database)?;

    let days = chairtime_db::repositories::availability::get_week(&state.db_pool, shop_id)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(AvailabilityResponse {
        days: days.into_iter().map(to_day).collect(),
    }))
}
