//! Master-admin handlers: tenant provisioning and account creation. Every
//! endpoint here requires the configured bearer token.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use std::sync::Arc;

use chairtime_core::{
    errors::BookingError,
    models::barbershop::{
        AccountResponse, AccountRole, Barbershop, CreateAccountRequest, CreateBarbershopRequest,
        UpdateBarbershopRequest, slugify,
    },
};
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{auth, error_handling::AppError},
};

fn to_barbershop(db: chairtime_db::models::DbBarbershop) -> Barbershop {
    Barbershop {
        id: db.id,
        name: db.name,
        slug: db.slug,
        description: db.description,
        logo_url: db.logo_url,
        banner_url: db.banner_url,
        is_active: db.is_active,
        created_at: db.created_at,
        updated_at: db.updated_at,
    }
}

#[axum::debug_handler]
pub async fn create_barbershop(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateBarbershopRequest>,
) -> Result<Json<Barbershop>, AppError> {
    auth::require_master(&state, &headers)?;

    if payload.name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Barbershop name must not be empty".to_string(),
        )));
    }

    let slug = match &payload.slug {
        Some(slug) => slug.clone(),
        None => slugify(&payload.name),
    };

    // Slugs are the public URL namespace, so duplicates are a conflict
    // rather than a validation error.
    let existing = chairtime_db::repositories::barbershop::get_barbershop_by_slug(
        &state.db_pool,
        &slug,
    )
    .await
    .map_err(BookingError::Database)?;

    if existing.is_some() {
        return Err(AppError(BookingError::Conflict(format!(
            "Barbershop slug '{}' is already taken",
            slug
        ))));
    }

    let db_barbershop = chairtime_db::repositories::barbershop::create_barbershop(
        &state.db_pool,
        &payload.name,
        &slug,
        payload.description.as_deref(),
        payload.is_active,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(to_barbershop(db_barbershop)))
}

#[axum::debug_handler]
pub async fn list_barbershops(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Barbershop>>, AppError> {
    auth::require_master(&state, &headers)?;

    let db_barbershops = chairtime_db::repositories::barbershop::list_barbershops(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(db_barbershops.into_iter().map(to_barbershop).collect()))
}

#[axum::debug_handler]
pub async fn get_barbershop(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<Barbershop>, AppError> {
    auth::require_master(&state, &headers)?;

    let db_barbershop =
        chairtime_db::repositories::barbershop::get_barbershop_by_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Barbershop with ID {} not found", id))
            })?;

    Ok(Json(to_barbershop(db_barbershop)))
}

#[axum::debug_handler]
pub async fn update_barbershop(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBarbershopRequest>,
) -> Result<Json<Barbershop>, AppError> {
    auth::require_master(&state, &headers)?;

    if payload.name.trim().is_empty() || payload.slug.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Barbershop name and slug must not be empty".to_string(),
        )));
    }

    let existing = chairtime_db::repositories::barbershop::get_barbershop_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Barbershop with ID {} not found", id)))?;

    // The slug may move, but not onto another tenant.
    if payload.slug != existing.slug {
        let taken = chairtime_db::repositories::barbershop::get_barbershop_by_slug(
            &state.db_pool,
            &payload.slug,
        )
        .await
        .map_err(BookingError::Database)?;

        if taken.is_some() {
            return Err(AppError(BookingError::Conflict(format!(
                "Barbershop slug '{}' is already taken",
                payload.slug
            ))));
        }
    }

    let db_barbershop = chairtime_db::repositories::barbershop::update_barbershop(
        &state.db_pool,
        id,
        &payload.name,
        &payload.slug,
        payload.description.as_deref(),
        payload.is_active,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(to_barbershop(db_barbershop)))
}

#[axum::debug_handler]
pub async fn delete_barbershop(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    auth::require_master(&state, &headers)?;

    chairtime_db::repositories::barbershop::get_barbershop_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Barbershop with ID {} not found", id)))?;

    chairtime_db::repositories::barbershop::delete_barbershop(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn create_account(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    auth::require_master(&state, &headers)?;

    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(AppError(BookingError::Validation(
            "A valid email address is required".to_string(),
        )));
    }
    if payload.password.len() < 8 {
        return Err(AppError(BookingError::Validation(
            "Password must be at least 8 characters".to_string(),
        )));
    }

    chairtime_db::repositories::barbershop::get_barbershop_by_id(
        &state.db_pool,
        payload.barbershop_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::NotFound(format!(
            "Barbershop with ID {} not found",
            payload.barbershop_id
        ))
    })?;

    let existing =
        chairtime_db::repositories::account::get_account_by_email(&state.db_pool, &payload.email)
            .await
            .map_err(BookingError::Database)?;

    if existing.is_some() {
        return Err(AppError(BookingError::Conflict(format!(
            "An account already exists for {}",
            payload.email
        ))));
    }

    let password_hash = auth::hash_password(&payload.password).map_err(BookingError::Database)?;

    let db_account = chairtime_db::repositories::account::create_account(
        &state.db_pool,
        &payload.email,
        &password_hash,
        payload.role.as_str(),
        Some(payload.barbershop_id),
    )
    .await
    .map_err(BookingError::Database)?;

    let role = AccountRole::parse(&db_account.role).ok_or_else(|| {
        BookingError::Internal(format!("Unknown account role '{}'", db_account.role).into())
    })?;

    Ok(Json(AccountResponse {
        id: db_account.id,
        email: db_account.email,
        role,
        barbershop_id: db_account.barbershop_id,
        created_at: db_account.created_at,
    }))
}
