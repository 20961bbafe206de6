use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, header},
};
use chairtime_api::handlers::admin;
use chairtime_core::{errors::BookingError, models::barbershop::CreateBarbershopRequest};

use crate::test_utils::{TEST_MASTER_TOKEN, TestContext};

// These exercise the real handlers up to the point where they would hit the
// database: the guard and validation paths return before any query runs, so
// the lazily connecting pool is never touched.

fn create_request(name: &str) -> CreateBarbershopRequest {
    CreateBarbershopRequest {
        name: name.to_string(),
        slug: None,
        description: None,
        is_active: true,
    }
}

#[tokio::test]
async fn test_create_barbershop_requires_token() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let result = admin::create_barbershop(
        State(state),
        HeaderMap::new(),
        axum::Json(create_request("Cool Cuts")),
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err.0, BookingError::Authentication(_)));
}

#[tokio::test]
async fn test_create_barbershop_rejects_wrong_token() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Bearer wrong-token"),
    );

    let result = admin::create_barbershop(
        State(state),
        headers,
        axum::Json(create_request("Cool Cuts")),
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err.0, BookingError::Authorization(_)));
}

#[tokio::test]
async fn test_create_barbershop_rejects_empty_name() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", TEST_MASTER_TOKEN)).unwrap(),
    );

    let result =
        admin::create_barbershop(State(state), headers, axum::Json(create_request("   "))).await;

    let err = result.unwrap_err();
    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_list_barbershops_requires_token() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let result = admin::list_barbershops(State(state), HeaderMap::new()).await;

    let err = result.unwrap_err();
    assert!(matches!(err.0, BookingError::Authentication(_)));
}
