use crate::models::DbClient;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_client(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    name: &str,
    phone: &str,
    email: Option<&str>,
) -> Result<DbClient> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating client: id={}, barbershop_id={}", id, barbershop_id);

    let client = sqlx::query_as::<_, DbClient>(
        r#"
        INSERT INTO clients (id, barbershop_id, name, phone, email, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, barbershop_id, name, phone, email, notes, created_at
        "#,
    )
    .bind(id)
    .bind(barbershop_id)
    .bind(name)
    .bind(phone)
    .bind(email)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(client)
}

pub async fn find_client_by_phone(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
    phone: &str,
) -> Result<Option<DbClient>> {
    let client = sqlx::query_as::<_, DbClient>(
        r#"
        SELECT id, barbershop_id, name, phone, email, notes, created_at
        FROM clients
        WHERE barbershop_id = $1 AND phone = $2
        "#,
    )
    .bind(barbershop_id)
    .bind(phone)
    .fetch_optional(pool)
    .await?;

    Ok(client)
}
