//! # Vidly Config
//!
//! Configuration types for the Vidly API, loaded from environment variables.
//!
//! - [`jwt`]: Token signing secret and expiry
//! - [`cors`]: Allowed origins
//! - [`database`]: Connection URL and pool size
//! - [`rate_limit`]: Rate limits for the login endpoint
//! - [`server`]: Listen port, log level and metrics toggle
//!
//! # Example
//!
//! ```ignore
//! use vidly_config::{CorsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod rate_limit;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
pub use server::{LogFormat, ServerConfig};

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok(), default)
}

/// Parses a raw setting, falling back to `default` when it is missing or
/// does not parse as `T`.
pub(crate) fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Boolean flags are on unless set to `false` or `0`.
pub(crate) fn flag_or_true(raw: Option<String>) -> bool {
    raw.map(|v| v.to_lowercase() != "false" && v != "0")
        .unwrap_or(true)
}
