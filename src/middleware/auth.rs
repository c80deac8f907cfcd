use anyhow::anyhow;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use uuid::Uuid;

use vidly_auth::{Claims, verify_token};
use vidly_config::JwtConfig;
use vidly_core::AppError;

/// Header carrying the identity token, on requests and on registration
/// responses.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Extractor that validates the identity token and provides its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        self.0.user_id()
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    JwtConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::unauthorized(anyhow!("Access denied. No token provided.")))?;

        let jwt_config = JwtConfig::from_ref(state);
        let claims = verify_token(token, &jwt_config)?;

        Ok(AuthUser(claims))
    }
}
