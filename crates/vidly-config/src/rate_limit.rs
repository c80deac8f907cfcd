//! Rate limiting configuration for the login endpoint.
//!
//! Rate limits protect `POST /api/auth` against credential stuffing. They are
//! keyed by peer IP, so the server must be run with connect info attached.
//!
//! # Configuration
//!
//! - `RATE_LIMIT_ENABLED`: Set to `false` to disable (default: true)
//! - `RATE_LIMIT_AUTH_PER_SECOND`: Token replenishment interval for auth endpoints (default: 10)
//! - `RATE_LIMIT_AUTH_BURST_SIZE`: Burst size for auth endpoints (default: 5)
//!
//! # Example
//!
//! ```ignore
//! use vidly_config::RateLimitConfig;
//!
//! let config = RateLimitConfig::from_env();
//! if let Some(governor) = config.auth_governor_config() {
//!     router = router.layer(GovernorLayer::new(Arc::new(governor)));
//! }
//! ```

use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::PeerIpKeyExtractor;

use crate::{env_or, flag_or_true};

pub type AuthGovernorConfig =
    GovernorConfig<PeerIpKeyExtractor, ::governor::middleware::NoOpMiddleware>;

/// Rate limit configuration for the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,

    /// Requests per second for auth endpoints.
    ///
    /// This is the rate at which tokens are replenished in the bucket.
    pub auth_per_second: u64,

    /// Burst size for auth endpoints.
    ///
    /// The maximum number of tokens that can accumulate, allowing short
    /// bursts above the per-second rate.
    pub auth_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auth_per_second: 10,
            auth_burst_size: 5,
        }
    }
}

impl RateLimitConfig {
    /// A configuration that never limits. Used by tests, which drive the
    /// router without a peer address.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Creates a new `RateLimitConfig` from environment variables, falling
    /// back to defaults for unset or unparsable values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: flag_or_true(std::env::var("RATE_LIMIT_ENABLED").ok()),
            auth_per_second: env_or("RATE_LIMIT_AUTH_PER_SECOND", defaults.auth_per_second),
            auth_burst_size: env_or("RATE_LIMIT_AUTH_BURST_SIZE", defaults.auth_burst_size),
        }
    }

    /// Creates a `GovernorConfig` for authentication endpoints.
    ///
    /// Returns `None` when rate limiting is disabled or the configured values
    /// are rejected by the builder (a zero rate or burst size).
    #[must_use]
    pub fn auth_governor_config(&self) -> Option<AuthGovernorConfig> {
        if !self.enabled {
            return None;
        }

        GovernorConfigBuilder::default()
            .per_second(self.auth_per_second)
            .burst_size(self.auth_burst_size)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
    }
}
