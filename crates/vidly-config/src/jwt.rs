use std::env;

use crate::parse_or;

pub const DEFAULT_DEV_SECRET: &str = "vidly-dev-secret-change-in-production";

/// One day.
pub const DEFAULT_EXPIRY_SECS: u64 = 86400;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expiry: u64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. A negative or unparsable
    /// `JWT_EXPIRY` falls back to the default lifetime.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            secret: get("JWT_SECRET").unwrap_or_else(|| DEFAULT_DEV_SECRET.to_string()),
            expiry: parse_or(get("JWT_EXPIRY"), DEFAULT_EXPIRY_SECS),
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_DEV_SECRET
    }
}
