use crate::models::DbAccount;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_account(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
    role: &str,
    barbershop_id: Option<Uuid>,
) -> Result<DbAccount> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating account: id={}, email={}, role={}", id, email, role);

    let account = sqlx::query_as::<_, DbAccount>(
        r#"
        INSERT INTO accounts (id, email, password_hash, role, barbershop_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, email, password_hash, role, barbershop_id, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(barbershop_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(account)
}

pub async fn get_account_by_email(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<DbAccount>> {
    let account = sqlx::query_as::<_, DbAccount>(
        r#"
        SELECT id, email, password_hash, role, barbershop_id, created_at
        FROM accounts
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}
