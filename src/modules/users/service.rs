use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use vidly_core::{AppError, hash_password};
use vidly_models::{RegisterUserDto, User};

pub struct UserService;

impl UserService {
    /// Creates a regular (non-admin) user. Admins are only created from the
    /// CLI.
    #[instrument(skip(dto), fields(email = %dto.email))]
    pub async fn register_user(db: &PgPool, dto: RegisterUserDto) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (name, email, password)
               VALUES ($1, $2, $3)
               RETURNING id, name, email, is_admin"#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow!("User already registered."));
            }
            AppError::from(e)
        })
    }

    #[instrument]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("SELECT id, name, email, is_admin FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }
}
