use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use vidly_core::AppError;

/// Extractor for the `{id}` path segment.
///
/// A segment that is not a well-formed UUID is answered with 404, the same
/// as an id that does not exist, instead of surfacing a parse error.
#[derive(Debug, Clone, Copy)]
pub struct ValidId(pub Uuid);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found(anyhow!("Invalid ID")))?;

        Uuid::parse_str(&raw)
            .map(ValidId)
            .map_err(|_| AppError::not_found(anyhow!("Invalid ID")))
    }
}
