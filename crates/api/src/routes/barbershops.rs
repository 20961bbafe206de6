use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

// The first path segment under /api/barbershops is a slug on the public
// surface and a tenant id on the staff surface; the router requires one
// parameter name for that position, so every route here calls it :shop.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/barbershops/:shop",
            get(handlers::barbershops::get_shop_profile),
        )
        .route(
            "/api/barbershops/:shop/profile",
            put(handlers::barbershops::update_profile),
        )
}
