//! Genre models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenreDto {
    #[validate(length(min = 5, max = 50, message = "name must be between 5 and 50 characters"))]
    pub name: String,
}
