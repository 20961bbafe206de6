use crate::models::DbService;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    name: &str,
    duration_minutes: i32,
    price: f64,
    description: Option<&str>,
    is_active: bool,
) -> Result<DbService> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating service: id={}, barbershop_id={}", id, barbershop_id);

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, barbershop_id, name, duration_minutes, price, description, is_active, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, barbershop_id, name, duration_minutes, price, description, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .bind(name)
    .bind(duration_minutes)
    .bind(price)
    .bind(description)
    .bind(is_active)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_service_by_id(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    id: Uuid,
) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, barbershop_id, name, duration_minutes, price, description, is_active, created_at
        FROM services
        WHERE id = $1 AND barbershop_id = $2
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn list_services(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    active_only: bool,
) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, barbershop_id, name, duration_minutes, price, description, is_active, created_at
        FROM services
        WHERE barbershop_id = $1 AND (is_active OR NOT $2)
        ORDER BY name ASC
        "#,
    )
    .bind(barbershop_id)
    .bind(active_only)
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn update_service(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    id: Uuid,
    name: &str,
    duration_minutes: i32,
    price: f64,
    description: Option<&str>,
) -> Result<DbService> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        UPDATE services
        SET name = $3, duration_minutes = $4, price = $5, description = $6
        WHERE id = $1 AND barbershop_id = $2
        RETURNING id, barbershop_id, name, duration_minutes, price, description, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .bind(name)
    .bind(duration_minutes)
    .bind(price)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn set_service_active(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    id: Uuid,
    is_active: bool,
) -> Result<DbService> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        UPDATE services
        SET is_active = $3
        WHERE id = $1 AND barbershop_id = $2
        RETURNING id, barbershop_id, name, duration_minutes, price, description, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .bind(is_active)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn delete_service(pool: &Pool<Postgres>, barbershop_id: Uuid, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM services
        WHERE id = $1 AND barbershop_id = $2
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .execute(pool)
    .await?;

    Ok(())
}
