use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/barbershops/:shop/stats",
            get(handlers::dashboard::get_stats),
        )
        .route(
            "/api/barbershops/:shop/revenue",
            get(handlers::dashboard::get_revenue),
        )
}
