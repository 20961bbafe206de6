use crate::models::{DbMonthlyRevenue, DbPayment};
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Marks an appointment completed and records its payment in one
/// transaction. A completed appointment is terminal, so the status flip and
/// the payment row must land together or not at all.
#[allow(clippy::too_many_arguments)]
pub async fn complete_appointment_with_payment(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    appointment_id: Uuid,
    barber_id: Uuid,
    amount: f64,
    payment_method: &str,
    payment_date: NaiveDate,
    barber_commission: f64,
    shop_revenue: f64,
    notes: Option<&str>,
) -> Result<DbPayment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Completing appointment with payment: id={}, appointment_id={}, amount={}",
        id,
        appointment_id,
        amount
    );

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE appointments
        SET status = 'completed'
        WHERE id = $1 AND barbershop_id = $2
        "#,
    )
    .bind(appointment_id)
    .bind(barbershop_id)
    .execute(&mut *tx)
    .await?;

    let payment = sqlx::query_as::<_, DbPayment>(
        r#"
        INSERT INTO payments (
            id, barbershop_id, appointment_id, barber_id, amount,
            payment_method, payment_date, barber_commission, shop_revenue,
            notes, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, barbershop_id, appointment_id, barber_id, amount,
                  payment_method, payment_date, barber_commission, shop_revenue,
                  notes, created_at
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .bind(appointment_id)
    .bind(barber_id)
    .bind(amount)
    .bind(payment_method)
    .bind(payment_date)
    .bind(barber_commission)
    .bind(shop_revenue)
    .bind(notes)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(payment)
}

pub async fn revenue_for_date(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    date: NaiveDate,
) -> Result<f64> {
    let total = sqlx::query_scalar::<_, f64>(
        r#"
        SELECT COALESCE(SUM(amount), 0)
        FROM payments
        WHERE barbershop_id = $1 AND payment_date = $2
        "#,
    )
    .bind(barbershop_id)
    .bind(date)
    .fetch_one(pool)
    .await?;

    Ok(total)
}

pub async fn revenue_for_range(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<f64> {
    let total = sqlx::query_scalar::<_, f64>(
        r#"
        SELECT COALESCE(SUM(amount), 0)
        FROM payments
        WHERE barbershop_id = $1 AND payment_date >= $2 AND payment_date <= $3
        "#,
    )
    .bind(barbershop_id)
    .bind(from)
    .bind(to)
    .fetch_one(pool)
    .await?;

    Ok(total)
}

/// Per-month revenue totals for a calendar year. Months without payments
/// are absent from the result; the handler zero-fills all twelve.
pub async fn monthly_totals(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    year: i32,
) -> Result<Vec<DbMonthlyRevenue>> {
    let totals = sqlx::query_as::<_, DbMonthlyRevenue>(
        r#"
        SELECT EXTRACT(MONTH FROM payment_date)::INT AS month,
               COALESCE(SUM(amount), 0) AS total
        FROM payments
        WHERE barbershop_id = $1
          AND EXTRACT(YEAR FROM payment_date)::INT = $2
        GROUP BY month
        ORDER BY month ASC
        "#,
    )
    .bind(barbershop_id)
    .bind(year)
    .fetch_all(pool)
    .await?;

    Ok(totals)
}
