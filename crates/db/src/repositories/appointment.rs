use crate::models::{DbAppointment, DbAppointmentDetail, DbBookedSpan};
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[allow(clippy::too_many_arguments)]
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    client_id: Uuid,
    barber_id: Uuid,
    service_id: Uuid,
    appointment_date: NaiveDate,
    start_time: NaiveTime,
    notes: Option<&str>,
    price_at_booking: f64,
    duration_at_booking: i32,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: id={}, barber_id={}, date={}, start={}",
        id,
        barber_id,
        appointment_date,
        start_time
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (
            id, barbershop_id, client_id, barber_id, service_id,
            appointment_date, start_time, status, notes,
            price_at_booking, duration_at_booking, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', $8, $9, $10, $11)
        RETURNING id, barbershop_id, client_id, barber_id, service_id,
                  appointment_date, start_time, status, notes,
                  price_at_booking, duration_at_booking, created_at
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .bind(client_id)
    .bind(barber_id)
    .bind(service_id)
    .bind(appointment_date)
    .bind(start_time)
    .bind(notes)
    .bind(price_at_booking)
    .bind(duration_at_booking)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, barbershop_id, client_id, barber_id, service_id,
               appointment_date, start_time, status, notes,
               price_at_booking, duration_at_booking, created_at
        FROM appointments
        WHERE id = $1 AND barbershop_id = $2
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Listing for the staff dashboard, joined with the names shown alongside
/// each row. Both filters are optional.
pub async fn list_appointments(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    date: Option<NaiveDate>,
    status: Option<&str>,
) -> Result<Vec<DbAppointmentDetail>> {
    let appointments = sqlx::query_as::<_, DbAppointmentDetail>(
        r#"
        SELECT a.id, a.appointment_date, a.start_time, a.status, a.notes,
               a.price_at_booking, a.duration_at_booking,
               c.name AS client_name, c.phone AS client_phone,
               b.name AS barber_name, s.name AS service_name,
               a.created_at
        FROM appointments a
        JOIN clients c ON c.id = a.client_id
        JOIN barbers b ON b.id = a.barber_id
        JOIN services s ON s.id = a.service_id
        WHERE a.barbershop_id = $1
          AND ($2::date IS NULL OR a.appointment_date = $2)
          AND ($3::varchar IS NULL OR a.status = $3)
        ORDER BY a.appointment_date ASC, a.start_time ASC
        "#,
    )
    .bind(barbershop_id)
    .bind(date)
    .bind(status)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Spans that still occupy the booking grid for a barber on a date: only
/// pending and confirmed appointments block time.
pub async fn active_spans_for_barber(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    barber_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbBookedSpan>> {
    let spans = sqlx::query_as::<_, DbBookedSpan>(
        r#"
        SELECT start_time, duration_at_booking
        FROM appointments
        WHERE barbershop_id = $1
          AND barber_id = $2
          AND appointment_date = $3
          AND status IN ('pending', 'confirmed')
        ORDER BY start_time ASC
        "#,
    )
    .bind(barbershop_id)
    .bind(barber_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(spans)
}

pub async fn update_status(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    id: Uuid,
    status: &str,
) -> Result<DbAppointment> {
    tracing::debug!("Updating appointment status: id={}, status={}", id, status);

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET status = $3
        WHERE id = $1 AND barbershop_id = $2
        RETURNING id, barbershop_id, client_id, barber_id, service_id,
                  appointment_date, start_time, status, notes,
                  price_at_booking, duration_at_booking, created_at
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .bind(status)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn count_for_date(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    date: NaiveDate,
) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM appointments
        WHERE barbershop_id = $1 AND appointment_date = $2 AND status <> 'cancelled'
        "#,
    )
    .bind(barbershop_id)
    .bind(date)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn count_pending(pool: &Pool<Postgres>, barbershop_id: Uuid) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM appointments
        WHERE barbershop_id = $1 AND status = 'pending'
        "#,
    )
    .bind(barbershop_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
