use crate::models::DbDayAvailability;
use chairtime_core::models::availability::DayAvailability;
use eyre::Result;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Upserts a batch of weekday rows in one transaction, so a failure partway
/// through never leaves the week half-saved.
pub async fn upsert_week(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    days: &[DayAvailability],
) -> Result<()> {
    tracing::debug!(
        "Upserting availability: barbershop_id={}, days={}",
        barbershop_id,
        days.len()
    );

    let mut tx = pool.begin().await?;

    for day in days {
        sqlx::query(
            r#"
            INSERT INTO availability (id, barbershop_id, day_of_week, start_time, end_time, is_active, breaks)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (barbershop_id, day_of_week)
            DO UPDATE SET start_time = $4, end_time = $5, is_active = $6, breaks = $7
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(barbershop_id)
        .bind(day.day_of_week)
        .bind(day.start_time)
        .bind(day.end_time)
        .bind(day.is_active)
        .bind(Json(day.breaks.clone()))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

pub async fn get_week(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
) -> Result<Vec<DbDayAvailability>> {
    let days = sqlx::query_as::<_, DbDayAvailability>(
        r#"
        SELECT id, barbershop_id, day_of_week, start_time, end_time, is_active, breaks
        FROM availability
        WHERE barbershop_id = $1
        ORDER BY day_of_week ASC
        "#,
    )
    .bind(barbershop_id)
    .fetch_all(pool)
    .await?;

    Ok(days)
}

pub async fn get_day(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    day_of_week: i16,
) -> Result<Option<DbDayAvailability>> {
    let day = sqlx::query_as::<_, DbDayAvailability>(
        r#"
        SELECT id, barbershop_id, day_of_week, start_time, end_time, is_active, breaks
        FROM availability
        WHERE barbershop_id = $1 AND day_of_week = $2
        "#,
    )
    .bind(barbershop_id)
    .bind(day_of_week)
    .fetch_optional(pool)
    .await?;

    Ok(day)
}
