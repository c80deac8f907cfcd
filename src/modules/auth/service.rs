use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use vidly_auth::create_auth_token;
use vidly_config::JwtConfig;
use vidly_core::{AppError, verify_password};
use vidly_models::{LoginRequest, LoginResponse};

fn invalid_credentials() -> AppError {
    AppError::bad_request(anyhow!("Invalid email or password."))
}

pub struct AuthService;

impl AuthService {
    /// Checks the credentials and issues a token.
    ///
    /// An unknown email and a wrong password produce the same error.
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserCredentials {
            id: Uuid,
            is_admin: bool,
            password: String,
        }

        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, is_admin, password FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(invalid_credentials)?;

        if !verify_password(&dto.password, &credentials.password)? {
            return Err(invalid_credentials());
        }

        let token = create_auth_token(credentials.id, credentials.is_admin, jwt_config)?;

        Ok(LoginResponse { token })
    }
}
