//! User models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A registered user. The password hash is never loaded into this type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    #[validate(length(min = 5, max = 50, message = "name must be between 5 and 50 characters"))]
    pub name: String,
    #[validate(
        email(message = "email must be a valid email"),
        length(min = 5, max = 255, message = "email must be between 5 and 255 characters")
    )]
    pub email: String,
    #[validate(length(min = 5, max = 1024, message = "password must be at least 5 characters"))]
    pub password: String,
}
