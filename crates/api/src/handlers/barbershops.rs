//! Shop-facing handlers: the public profile the booking page renders and
//! the staff branding update.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use chairtime_core::{
    errors::BookingError,
    models::{
        barber::Barber,
        barbershop::{Barbershop, ShopProfileResponse, UpdateProfileRequest},
        service::Service,
    },
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Resolves a public slug to an active shop, hiding deactivated tenants
/// behind the same 404 as unknown slugs.
pub(crate) async fn active_shop_by_slug(
    state: &ApiState,
    slug: &str,
) -> Result<chairtime_db::models::DbBarbershop, AppError> {
    let shop = chairtime_db::repositories::barbershop::get_barbershop_by_slug(&state.db_pool, slug)
        .await
        .map_err(BookingError::Database)?
        .filter(|shop| shop.is_active)
        .ok_or_else(|| BookingError::NotFound(format!("Barbershop '{}' not found", slug)))?;

    Ok(shop)
}

#[axum::debug_handler]
pub async fn get_shop_profile(
    State(state): State<Arc<ApiState>>,
    Path(slug): Path<String>,
) -> Result<Json<ShopProfileResponse>, AppError> {
    let shop = active_shop_by_slug(&state, &slug).await?;

    // Only bookable services show up publicly; inactive ones stay on the
    // staff dashboard.
    let services =
        chairtime_db::repositories::service::list_services(&state.db_pool, shop.id, true)
            .await
            .map_err(BookingError::Database)?;

    let barbers = chairtime_db::repositories::barber::list_barbers(&state.db_pool, shop.id)
        .await
        .map_err(BookingError::Database)?;

    let response = ShopProfileResponse {
        barbershop: Barbershop {
            id: shop.id,
            name: shop.name,
            slug: shop.slug,
            description: shop.description,
            logo_url: shop.logo_url,
            banner_url: shop.banner_url,
            is_active: shop.is_active,
            created_at: shop.created_at,
            updated_at: shop.updated_at,
        },
        services: services
            .into_iter()
            .map(|s| Service {
                id: s.id,
                name: s.name,
                duration_minutes: s.duration_minutes,
                price: s.price,
                description: s.description,
                is_active: s.is_active,
                created_at: s.created_at,
            })
            .collect(),
        barbers: barbers
            .into_iter()
            .map(|b| Barber {
                id: b.id,
                name: b.name,
                email: b.email,
                phone: b.phone,
                specialty: b.specialty,
                created_at: b.created_at,
            })
            .collect(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<Arc<ApiState>>,
    Path(shop_id): Path<Uuid>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<Barbershop>, AppError> {
    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return Err(AppError(BookingError::Validation(
                "Barbershop name must not be empty".to_string(),
            )));
        }
    }

    chairtime_db::repositories::barbershop::get_barbershop_by_id(&state.db_pool, shop_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Barbershop with ID {} not found", shop_id))
        })?;

    let updated = chairtime_db::repositories::barbershop::update_profile(
        &state.db_pool,
        shop_id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.logo_url.as_deref(),
        payload.banner_url.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(Barbershop {
        id: updated.id,
        name: updated.name,
        slug: updated.slug,
        description: updated.description,
        logo_url: updated.logo_url,
        banner_url: updated.banner_url,
        is_active: updated.is_active,
        created_at: updated.created_at,
        updated_at: updated.updated_at,
    }))
}
