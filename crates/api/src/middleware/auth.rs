//! # Authentication Module
//!
//! Password hashing for provisioned accounts and the bearer-token guard for
//! the master-admin surface. Login and session management are external
//! concerns; the API itself only hashes credentials at provisioning time and
//! checks the static master token on admin requests.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::http::HeaderMap;
use chairtime_core::errors::BookingError;
use eyre::Result;

use crate::ApiState;
use crate::middleware::error_handling::AppError;

/// Hashes a password using Argon2 with a fresh random salt, returning the
/// PHC string stored in the accounts table.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Requires a valid `Authorization: Bearer <token>` header matching the
/// configured master token. With no token configured the surface is closed.
pub fn require_master(state: &ApiState, headers: &HeaderMap) -> Result<(), AppError> {
    let Some(expected) = state.master_token.as_deref() else {
        return Err(AppError(BookingError::Authorization(
            "Master admin surface is not configured".to_string(),
        )));
    };

    let provided = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match provided {
        Some(token) if token == expected => Ok(()),
        Some(_) => Err(AppError(BookingError::Authorization(
            "Invalid master admin token".to_string(),
        ))),
        None => Err(AppError(BookingError::Authentication(
            "Missing master admin token".to_string(),
        ))),
    }
}
