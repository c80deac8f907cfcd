//! # Vidly Core
//!
//! Core types, errors, and utilities for the Vidly API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use vidly_core::errors::AppError;
//! use vidly_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Genre not found"));
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use password::{hash_password, verify_password};
