use crate::models::DbBarbershop;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_barbershop(
    pool: &Pool<Postgres>,
    name: &str,
    slug: &str,
    description: Option<&str>,
    is_active: bool,
) -> Result<DbBarbershop> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating barbershop: id={}, slug={}", id, slug);

    let barbershop = sqlx::query_as::<_, DbBarbershop>(
        r#"
        INSERT INTO barbershops (id, name, slug, description, is_active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING id, name, slug, description, logo_url, banner_url, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(slug)
    .bind(description)
    .bind(is_active)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(barbershop)
}

pub async fn get_barbershop_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbBarbershop>> {
    let barbershop = sqlx::query_as::<_, DbBarbershop>(
        r#"
        SELECT id, name, slug, description, logo_url, banner_url, is_active, created_at, updated_at
        FROM barbershops
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(barbershop)
}

pub async fn get_barbershop_by_slug(
    pool: &Pool<Postgres>,
    slug: &str,
) -> Result<Option<DbBarbershop>> {
    let barbershop = sqlx::query_as::<_, DbBarbershop>(
        r#"
        SELECT id, name, slug, description, logo_url, banner_url, is_active, created_at, updated_at
        FROM barbershops
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(barbershop)
}

pub async fn list_barbershops(pool: &Pool<Postgres>) -> Result<Vec<DbBarbershop>> {
    let barbershops = sqlx::query_as::<_, DbBarbershop>(
        r#"
        SELECT id, name, slug, description, logo_url, banner_url, is_active, created_at, updated_at
        FROM barbershops
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(barbershops)
}

pub async fn update_barbershop(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: &str,
    slug: &str,
    description: Option<&str>,
    is_active: bool,
) -> Result<DbBarbershop> {
    let barbershop = sqlx::query_as::<_, DbBarbershop>(
        r#"
        UPDATE barbershops
        SET name = $2, slug = $3, description = $4, is_active = $5, updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, slug, description, logo_url, banner_url, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(slug)
    .bind(description)
    .bind(is_active)
    .fetch_one(pool)
    .await?;

    Ok(barbershop)
}

pub async fn update_profile(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    description: Option<&str>,
    logo_url: Option<&str>,
    banner_url: Option<&str>,
) -> Result<DbBarbershop> {
    let barbershop = sqlx::query_as::<_, DbBarbershop>(
        r#"
        UPDATE barbershops
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            logo_url = COALESCE($4, logo_url),
            banner_url = COALESCE($5, banner_url),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, slug, description, logo_url, banner_url, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(logo_url)
    .bind(banner_url)
    .fetch_one(pool)
    .await?;

    Ok(barbershop)
}

/// Deletes a tenant and everything scoped to it, children first so foreign
/// keys hold at every step.
pub async fn delete_barbershop(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    tracing::debug!("Deleting barbershop and all tenant data: id={}", id);

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM payments WHERE barbershop_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM appointments WHERE barbershop_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM availability WHERE barbershop_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM clients WHERE barbershop_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM services WHERE barbershop_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM barbers WHERE barbershop_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM accounts WHERE barbershop_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM barbershops WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
