//! Login request and token response.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(
        email(message = "email must be a valid email"),
        length(min = 5, max = 255, message = "email must be between 5 and 255 characters")
    )]
    pub email: String,
    #[validate(length(min = 5, max = 1024, message = "password must be at least 5 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}
