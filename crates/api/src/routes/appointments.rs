use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/barbershops/:shop/appointments",
            get(handlers::appointments::list_appointments),
        )
        .route(
            "/api/barbershops/:shop/appointments/:appointment_id/status",
            put(handlers::appointments::update_status),
        )
        .route(
            "/api/barbershops/:shop/appointments/:appointment_id/complete",
            post(handlers::appointments::complete_appointment),
        )
}
