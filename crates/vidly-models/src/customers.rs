//! Customer models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    /// Gold customers get a 10% discount on rental fees.
    pub is_gold: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[validate(length(min = 5, max = 50, message = "name must be between 5 and 50 characters"))]
    pub name: String,
    #[validate(length(min = 5, max = 50, message = "phone must be between 5 and 50 characters"))]
    pub phone: String,
    #[serde(default)]
    pub is_gold: bool,
}
