use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/admin/barbershops",
            post(handlers::admin::create_barbershop).get(handlers::admin::list_barbershops),
        )
        .route(
            "/api/admin/barbershops/:id",
            get(handlers::admin::get_barbershop)
                .put(handlers::admin::update_barbershop)
                .delete(handlers::admin::delete_barbershop),
        )
        .route("/api/admin/accounts", post(handlers::admin::create_account))
}
