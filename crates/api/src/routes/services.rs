use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/barbershops/:shop/services",
            get(handlers::services::list_services).post(handlers::services::create_service),
        )
        .route(
            "/api/barbershops/:shop/services/:service_id",
            put(handlers::services::update_service).delete(handlers::services::delete_service),
        )
        .route(
            "/api/barbershops/:shop/services/:service_id/active",
            put(handlers::services::set_service_active),
        )
}
