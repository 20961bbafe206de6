//! Staff appointment handlers: the dashboard listing, the status state
//! machine, and completion with payment capture.
//!
//! Status transitions are enforced here rather than in SQL: pending may be
//! confirmed or cancelled, confirmed may be completed or cancelled, and the
//! terminal states never change. Completion goes through its own endpoint
//! because it also records the payment and the commission split.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;

use chairtime_core::{
    errors::BookingError,
    models::{
        appointment::{AppointmentResponse, AppointmentStatus, UpdateStatusRequest},
        payment::{CompleteAppointmentRequest, PaymentMethod, PaymentResponse, commission_split},
    },
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct AppointmentsQuery {
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
}

fn parse_status(value: &str) -> Result<AppointmentStatus, AppError> {
    AppointmentStatus::parse(value).ok_or_else(|| {
        AppError(BookingError::Validation(format!(
            "Unknown appointment status '{}'",
            value
        )))
    })
}

fn stored_status(value: &str) -> Result<AppointmentStatus, AppError> {
    AppointmentStatus::parse(value).ok_or_else(|| {
        AppError(BookingError::Internal(
            format!("Unknown appointment status '{}'", value).into(),
        ))
    })
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Path(shop_id): Path<Uuid>,
    Query(query): Query<AppointmentsQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    // Reject unknown status filters instead of silently matching nothing.
    let status_filter = match &query.status {
        Some(value) => Some(parse_status(value)?),
        None => None,
    };

    chairtime_db::repositories::barbershop::get_barbershop_by_id(&state.db_pool, shop_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Barbershop with ID {} not found", shop_id))
        })?;

    let rows = chairtime_db::repositories::appointment::list_appointments(
        &state.db_pool,
        shop_id,
        query.date,
        status_filter.map(|s| s.as_str()),
    )
    .await
    .map_err(BookingError::Database)?;

    let mut appointments = Vec::with_capacity(rows.len());
    for row in rows {
        appointments.push(AppointmentResponse {
            id: row.id,
            date: row.appointment_date,
            start_time: row.start_time,
            status: stored_status(&row.status)?,
            notes: row.notes,
            price_at_booking: row.price_at_booking,
            duration_at_booking: row.duration_at_booking,
            client_name: row.client_name,
            client_phone: row.client_phone,
            barber_name: row.barber_name,
            service_name: row.service_name,
            created_at: row.created_at,
        });
    }

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn update_status(
    State(state): State<Arc<ApiState>>,
    Path((shop_id, appointment_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = chairtime_db::repositories::appointment::get_appointment_by_id(
        &state.db_pool,
        shop_id,
        appointment_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::NotFound(format!(
            "Appointment with ID {} not found",
            appointment_id
        ))
    })?;

    let current = stored_status(&appointment.status)?;
    if !current.can_transition_to(payload.status) {
        return Err(AppError(BookingError::Conflict(format!(
            "Cannot change a {} appointment to {}",
            current.as_str(),
            payload.status.as_str()
        ))));
    }

    chairtime_db::repositories::appointment::update_status(
        &state.db_pool,
        shop_id,
        appointment_id,
        payload.status.as_str(),
    )
    .await
    .map_err(BookingError::Database)?;

    // Re-read through the joined listing shape so the dashboard can swap
    // the row in place.
    let rows = chairtime_db::repositories::appointment::list_appointments(
        &state.db_pool,
        shop_id,
        Some(appointment.appointment_date),
        None,
    )
    .await
    .map_err(BookingError::Database)?;

    let row = rows
        .into_iter()
        .find(|r| r.id == appointment_id)
        .ok_or_else(|| {
            BookingError::Internal(
                format!("Appointment {} vanished after update", appointment_id).into(),
            )
        })?;

    Ok(Json(AppointmentResponse {
        id: row.id,
        date: row.appointment_date,
        start_time: row.start_time,
        status: stored_status(&row.status)?,
        notes: row.notes,
        price_at_booking: row.price_at_booking,
        duration_at_booking: row.duration_at_booking,
        client_name: row.client_name,
        client_phone: row.client_phone,
        barber_name: row.barber_name,
        service_name: row.service_name,
        created_at: row.created_at,
    }))
}

#[axum::debug_handler]
pub async fn complete_appointment(
    State(state): State<Arc<ApiState>>,
    Path((shop_id, appointment_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<CompleteAppointmentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    let appointment = chairtime_db::repositories::appointment::get_appointment_by_id(
        &state.db_pool,
        shop_id,
        appointment_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::NotFound(format!(
            "Appointment with ID {} not found",
            appointment_id
        ))
    })?;

    let current = stored_status(&appointment.status)?;
    if !current.can_transition_to(AppointmentStatus::Completed) {
        return Err(AppError(BookingError::Conflict(format!(
            "Cannot complete a {} appointment",
            current.as_str()
        ))));
    }

    // The charged amount defaults to the price snapshotted at booking time.
    let amount = payload.amount.unwrap_or(appointment.price_at_booking);
    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError(BookingError::Validation(
            "Payment amount must not be negative".to_string(),
        )));
    }

    let (barber_commission, shop_revenue) = commission_split(amount);
    let payment_date = Local::now().date_naive();

    // One transactional repository call: completed is terminal, so the
    // status flip must never outlive a failed payment insert.
    let payment = chairtime_db::repositories::payment::complete_appointment_with_payment(
        &state.db_pool,
        shop_id,
        appointment_id,
        appointment.barber_id,
        amount,
        payload.method.as_str(),
        payment_date,
        barber_commission,
        shop_revenue,
        payload.notes.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?;

    let method = PaymentMethod::parse(&payment.payment_method).ok_or_else(|| {
        BookingError::Internal(
            format!("Unknown payment method '{}'", payment.payment_method).into(),
        )
    })?;

    Ok(Json(PaymentResponse {
        id: payment.id,
        appointment_id: payment.appointment_id,
        amount: payment.amount,
        method,
        payment_date: payment.payment_date,
        barber_commission: payment.barber_commission,
        shop_revenue: payment.shop_revenue,
    }))
}
