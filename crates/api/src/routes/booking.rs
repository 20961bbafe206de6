use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/barbershops/:shop/slots",
            get(handlers::booking::get_slots),
        )
        .route(
            "/api/barbershops/:shop/bookings",
            post(handlers::booking::create_booking),
        )
}
