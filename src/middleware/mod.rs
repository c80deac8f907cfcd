//! Request extractors that guard the route handlers.
//!
//! Each guard is an extractor, so the value it produces (the caller's
//! identity, a parsed path id) is an explicit handler parameter rather than
//! something attached to the request.
//!
//! # Modules
//!
//! - [`auth`]: `AuthUser` validates the `x-auth-token` header (401 on failure)
//! - [`admin`]: `AdminUser` additionally requires the admin flag (403)
//! - [`object_id`]: `ValidId` parses the `{id}` path segment (404 if malformed)
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::{admin::AdminUser, object_id::ValidId};
//!
//! async fn delete_genre(
//!     State(state): State<AppState>,
//!     _admin: AdminUser,
//!     ValidId(id): ValidId,
//! ) -> Result<Json<Genre>, AppError> {
//!     // Only runs for admins with a well-formed id
//! }
//! ```
//!
//! Extractors run in argument order, so putting the identity guard before
//! `ValidId` and the body makes an anonymous request fail with 401 before
//! the id or body are looked at.

pub mod admin;
pub mod auth;
pub mod object_id;
