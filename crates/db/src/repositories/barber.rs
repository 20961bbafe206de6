use crate::models::DbBarber;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_barber(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    name: &str,
    email: &str,
    phone: Option<&str>,
    specialty: Option<&str>,
) -> Result<DbBarber> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating barber: id={}, barbershop_id={}", id, barbershop_id);

    let barber = sqlx::query_as::<_, DbBarber>(
        r#"
        INSERT INTO barbers (id, barbershop_id, name, email, phone, specialty, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, barbershop_id, name, email, phone, specialty, created_at
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(specialty)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(barber)
}

pub async fn get_barber_by_id(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    id: Uuid,
) -> Result<Option<DbBarber>> {
    let barber = sqlx::query_as::<_, DbBarber>(
        r#"
        SELECT id, barbershop_id, name, email, phone, specialty, created_at
        FROM barbers
        WHERE id = $1 AND barbershop_id = $2
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .fetch_optional(pool)
    .await?;

    Ok(barber)
}

pub async fn list_barbers(pool: &Pool<Postgres>, barbershop_id: Uuid) -> Result<Vec<DbBarber>> {
    let barbers = sqlx::query_as::<_, DbBarber>(
        r#"
        SELECT id, barbershop_id, name, email, phone, specialty, created_at
        FROM barbers
        WHERE barbershop_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(barbershop_id)
    .fetch_all(pool)
    .await?;

    Ok(barbers)
}

pub async fn update_barber(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    id: Uuid,
    name: &str,
    email: &str,
    phone: Option<&str>,
    specialty: Option<&str>,
) -> Result<DbBarber> {
    let barber = sqlx::query_as::<_, DbBarber>(
        r#"
        UPDATE barbers
        SET name = $3, email = $4, phone = $5, specialty = $6
        WHERE id = $1 AND barbershop_id = $2
        RETURNING id, barbershop_id, name, email, phone, specialty, created_at
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(specialty)
    .fetch_one(pool)
    .await?;

    Ok(barber)
}

/// Removes a barber together with their payments and appointments, children
/// first, in one transaction.
pub async fn delete_barber_and_related(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    id: Uuid,
) -> Result<()> {
    tracing::debug!(
        "Deleting barber and related records: id={}, barbershop_id={}",
        id,
        barbershop_id
    );

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM payments WHERE barber_id = $1 AND barbershop_id = $2")
        .bind(id)
        .bind(barbershop_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM appointments WHERE barber_id = $1 AND barbershop_id = $2")
        .bind(id)
        .bind(barbershop_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM barbers WHERE id = $1 AND barbershop_id = $2")
        .bind(id)
        .bind(barbershop_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
