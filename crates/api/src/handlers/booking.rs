//! Public booking handlers: the slot query driving the time picker and the
//! booking submission itself. Both run the same availability resolver; the
//! submission re-runs it at insert time so a slot taken between render and
//! submit is rejected instead of double-booked.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::sync::Arc;

use chairtime_core::{
    errors::BookingError,
    models::{
        appointment::{AppointmentStatus, BookingResponse, CreateBookingRequest},
        availability::SlotsResponse,
        client::Client,
    },
    slots::{BookedSpan, DayWindow, SlotPolicy, available_slots, minute_to_time, time_to_minute},
};
use uuid::Uuid;

use crate::{ApiState, handlers::barbershops::active_shop_by_slug, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub service_id: Uuid,
    pub barber_id: Uuid,
    pub date: NaiveDate,
}

/// Loads the weekday window and the barber's occupying appointments, then
/// runs the resolver. `now` is passed in so both callers share one clock
/// read per request.
async fn resolve_slots(
    state: &ApiState,
    shop_id: Uuid,
    service_duration: u32,
    barber_id: Uuid,
    date: NaiveDate,
    now: NaiveDateTime,
) -> Result<Vec<u32>, AppError> {
    let day_of_week = date.weekday().num_days_from_sunday() as i16;

    let window = chairtime_db::repositories::availability::get_day(
        &state.db_pool,
        shop_id,
        day_of_week,
    )
    .await
    .map_err(BookingError::Database)?
    .map(|day| DayWindow {
        start: time_to_minute(day.start_time),
        end: time_to_minute(day.end_time),
        is_active: day.is_active,
        breaks: day
            .breaks
            .0
            .iter()
            .map(|b| chairtime_core::slots::BlockedSpan::new(
                time_to_minute(b.start),
                time_to_minute(b.end),
            ))
            .collect(),
    });

    let booked: Vec<BookedSpan> = chairtime_db::repositories::appointment::active_spans_for_barber(
        &state.db_pool,
        shop_id,
        barber_id,
        date,
    )
    .await
    .map_err(BookingError::Database)?
    .into_iter()
    .map(|span| {
        let duration = (span.duration_at_booking > 0).then_some(span.duration_at_booking as u32);
        BookedSpan::new(time_to_minute(span.start_time), duration)
    })
    .collect();

    Ok(available_slots(
        service_duration,
        window.as_ref(),
        &booked,
        date,
        now,
        SlotPolicy::default(),
    ))
}

#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Path(slug): Path<String>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let shop = active_shop_by_slug(&state, &slug).await?;

    let service = chairtime_db::repositories::service::get_service_by_id(
        &state.db_pool,
        shop.id,
        query.service_id,
    )
    .await
    .map_err(BookingError::Database)?
    .filter(|service| service.is_active)
    .ok_or_else(|| {
        BookingError::NotFound(format!("Service with ID {} not found", query.service_id))
    })?;

    chairtime_db::repositories::barber::get_barber_by_id(&state.db_pool, shop.id, query.barber_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Barber with ID {} not found", query.barber_id))
        })?;

    let now = Local::now().naive_local();
    let slots = resolve_slots(
        &state,
        shop.id,
        service.duration_minutes.max(0) as u32,
        query.barber_id,
        query.date,
        now,
    )
    .await?;

    let slots = slots
        .into_iter()
        .filter_map(minute_to_time)
        .map(|t| t.format("%H:%M").to_string())
        .collect();

    Ok(Json(SlotsResponse { slots }))
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Path(slug): Path<String>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    if payload.client_name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Client name must not be empty".to_string(),
        )));
    }
    if payload.client_phone.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Client phone must not be empty".to_string(),
        )));
    }

    let shop = active_shop_by_slug(&state, &slug).await?;

    let service = chairtime_db::repositories::service::get_service_by_id(
        &state.db_pool,
        shop.id,
        payload.service_id,
    )
    .await
    .map_err(BookingError::Database)?
    .filter(|service| service.is_active)
    .ok_or_else(|| {
        BookingError::NotFound(format!("Service with ID {} not found", payload.service_id))
    })?;

    chairtime_db::repositories::barber::get_barber_by_id(&state.db_pool, shop.id, payload.barber_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Barber with ID {} not found", payload.barber_id))
        })?;

    // Re-run the resolver against current state. A start time that is off
    // the grid, past the cutoff, or newly occupied all fail the same way.
    let now = Local::now().naive_local();
    let slots = resolve_slots(
        &state,
        shop.id,
        service.duration_minutes.max(0) as u32,
        payload.barber_id,
        payload.date,
        now,
    )
    .await?;

    let requested_minute = time_to_minute(payload.start_time);
    if !slots.contains(&requested_minute) {
        return Err(AppError(BookingError::Conflict(format!(
            "The {} slot on {} is no longer available",
            payload.start_time.format("%H:%M"),
            payload.date
        ))));
    }

    // Returning clients are matched by phone within the tenant.
    let client = match chairtime_db::repositories::client::find_client_by_phone(
        &state.db_pool,
        shop.id,
        &payload.client_phone,
    )
    .await
    .map_err(BookingError::Database)?
    {
        Some(client) => client,
        None => chairtime_db::repositories::client::create_client(
            &state.db_pool,
            shop.id,
            &payload.client_name,
            &payload.client_phone,
            payload.client_email.as_deref(),
        )
        .await
        .map_err(BookingError::Database)?,
    };

    let appointment = chairtime_db::repositories::appointment::create_appointment(
        &state.db_pool,
        shop.id,
        client.id,
        payload.barber_id,
        payload.service_id,
        payload.date,
        payload.start_time,
        payload.notes.as_deref(),
        service.price,
        service.duration_minutes,
    )
    .await
    .map_err(BookingError::Database)?;

    let status = AppointmentStatus::parse(&appointment.status).ok_or_else(|| {
        BookingError::Internal(format!("Unknown appointment status '{}'", appointment.status).into())
    })?;

    Ok(Json(BookingResponse {
        id: appointment.id,
        date: appointment.appointment_date,
        start_time: appointment.start_time,
        status,
        price_at_booking: appointment.price_at_booking,
        duration_at_booking: appointment.duration_at_booking,
        client: Client {
            id: client.id,
            name: client.name,
            phone: client.phone,
            email: client.email,
            notes: client.notes,
            created_at: client.created_at,
        },
    }))
}
