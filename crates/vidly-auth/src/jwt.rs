//! JWT creation and verification for identity tokens.
//!
//! A token is issued on registration and login and must be presented in the
//! `x-auth-token` header on protected routes.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use vidly_config::JwtConfig;
use vidly_core::AppError;

use crate::claims::Claims;

/// Creates a signed identity token for a user.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_auth_token(
    user_id: Uuid,
    is_admin: bool,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let lifetime = usize::try_from(jwt_config.expiry).unwrap_or(usize::MAX);
    let exp = now.saturating_add(lifetime);

    let claims = Claims {
        sub: user_id.to_string(),
        is_admin,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies a token's signature and expiry and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, signed with a
/// different secret, or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid token.")))
}
