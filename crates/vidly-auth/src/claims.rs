//! JWT claim structure for identity tokens.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use vidly_core::AppError;

/// Claims embedded in every identity token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// Whether the user may perform admin-only operations
    pub is_admin: bool,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| AppError::unauthorized(anyhow!("Invalid user ID in token")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_round_trip_through_json() {
        let json = r#"{"sub":"7f9c2ad4-3c5e-4d35-9a8b-2f1b7c0e9d11","is_admin":true,"exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert!(claims.is_admin);
        assert_eq!(claims.exp, 9999999999);
        assert_eq!(
            claims.user_id().unwrap().to_string(),
            "7f9c2ad4-3c5e-4d35-9a8b-2f1b7c0e9d11"
        );
    }

    #[test]
    fn test_user_id_rejects_non_uuid_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            is_admin: false,
            exp: 0,
            iat: 0,
        };
        let err = claims.user_id().unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }
}
