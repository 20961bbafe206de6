use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/barbershops/:shop/barbers",
            get(handlers::barbers::list_barbers).post(handlers::barbers::create_barber),
        )
        .route(
            "/api/barbershops/:shop/barbers/:barber_id",
            put(handlers::barbers::update_barber).delete(handlers::barbers::delete_barber),
        )
}
