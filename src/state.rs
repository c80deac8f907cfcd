use anyhow::Context;
use axum::extract::FromRef;
use sqlx::PgPool;

use vidly_config::{CorsConfig, DatabaseConfig, JwtConfig, RateLimitConfig};
use vidly_db::init_db_pool;

/// Shared application state, built once at startup and cloned into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
}

impl FromRef<AppState> for JwtConfig {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_config.clone()
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;
    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the development secret");
    }

    Ok(AppState {
        db: init_db_pool(&database_config)
            .await
            .context("Failed to connect to database")?,
        jwt_config,
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
    })
}
