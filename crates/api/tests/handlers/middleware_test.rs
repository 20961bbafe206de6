use argon2::PasswordVerifier;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use chairtime_api::middleware::{auth, error_handling};
use chairtime_core::errors::BookingError;
use pretty_assertions::assert_eq;

use crate::test_utils::{TEST_MASTER_TOKEN, TestContext};

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = BookingError::NotFound("Resource not found".to_string());
    let response = error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = BookingError::Validation("Invalid input".to_string());
    let response = error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = BookingError::Authentication("Missing token".to_string());
    let response = error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    let error = BookingError::Authorization("Not authorized".to_string());
    let response = error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let error = BookingError::Conflict("Slot already taken".to_string());
    let response = error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = BookingError::Database(eyre::eyre!("Database error"));
    let response = error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = BookingError::Internal(Box::new(std::io::Error::other("Internal error")));
    let response = error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_hash_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));
}

#[tokio::test]
async fn test_hash_password_verifies_roundtrip() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    let argon2 = argon2::Argon2::default();
    let parsed_hash = argon2::PasswordHash::new(&hashed).unwrap();

    assert!(
        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    );
    assert!(
        argon2
            .verify_password("wrong_password".as_bytes(), &parsed_hash)
            .is_err()
    );
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

#[tokio::test]
async fn test_require_master_accepts_configured_token() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let result = auth::require_master(&state, &bearer_headers(TEST_MASTER_TOKEN));
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_require_master_rejects_wrong_token() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let err = auth::require_master(&state, &bearer_headers("not-the-token")).unwrap_err();
    assert!(matches!(err.0, BookingError::Authorization(_)));
}

#[tokio::test]
async fn test_require_master_rejects_missing_header() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let err = auth::require_master(&state, &HeaderMap::new()).unwrap_err();
    assert!(matches!(err.0, BookingError::Authentication(_)));
}

#[tokio::test]
async fn test_require_master_closed_when_unconfigured() {
    let ctx = TestContext::new();
    let state = ctx.build_state();
    let state = std::sync::Arc::new(chairtime_api::ApiState {
        db_pool: state.db_pool.clone(),
        master_token: None,
    });

    // Even a well-formed header is rejected when no token is configured.
    let err = auth::require_master(&state, &bearer_headers(TEST_MASTER_TOKEN)).unwrap_err();
    assert!(matches!(err.0, BookingError::Authorization(_)));
}
