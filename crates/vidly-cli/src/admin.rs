//! Admin account creation.
//!
//! Admin users can only be created here; the API registers regular users.

use anyhow::{Context, anyhow};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use vidly_core::hash_password;
use vidly_models::RegisterUserDto;

/// Creates an admin user, applying the same rules as API registration.
pub async fn create_admin(db: &PgPool, dto: RegisterUserDto) -> anyhow::Result<Uuid> {
    dto.validate().context("Invalid admin details")?;

    let hashed_password = hash_password(&dto.password).map_err(|e| e.error)?;

    let user_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email, password, is_admin)
         VALUES ($1, $2, $3, TRUE)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(&dto.name)
    .bind(&dto.email)
    .bind(&hashed_password)
    .fetch_optional(db)
    .await?;

    user_id.ok_or_else(|| anyhow!("User with this email already exists"))
}
