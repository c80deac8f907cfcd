//! Database connection settings.
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 10)

use std::env;

use crate::parse_or;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Returns `None` when `DATABASE_URL` is unset.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let url = get("DATABASE_URL")?;
        Some(Self {
            url,
            max_connections: parse_or(get("DATABASE_MAX_CONNECTIONS"), 10),
        })
    }
}
