//! # Vidly Auth
//!
//! Identity tokens for the Vidly API.
//!
//! - [`claims`]: The claim set carried by every token
//! - [`jwt`]: Token creation and verification
//!
//! Tokens are stateless: the user id and admin flag travel inside the signed
//! token, so authorization never needs a database lookup.
//!
//! # Example
//!
//! ```ignore
//! use vidly_auth::{create_auth_token, verify_token};
//! use vidly_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_auth_token(user_id, false, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert!(!claims.is_admin);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_auth_token, verify_token};
