use anyhow::anyhow;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use vidly_config::JwtConfig;
use vidly_core::AppError;

use crate::middleware::auth::AuthUser;

/// Extractor for admin-only operations.
///
/// Authentication runs first, so a missing or invalid token is still 401;
/// an authenticated non-admin gets 403.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

pub fn check_admin(auth_user: AuthUser) -> Result<AdminUser, AppError> {
    if !auth_user.is_admin() {
        return Err(AppError::forbidden(anyhow!("Access denied.")));
    }
    Ok(AdminUser(auth_user))
}

impl<S> FromRequestParts<S> for AdminUser
where
    JwtConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_admin(auth_user)
    }
}
