//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the signed-in user from a JWT Bearer token.
//! - [`rbac::RequireEditor`] -- Requires a role that may write content.
//! - [`rbac::RequireAuth`] -- Requires any signed-in user.

pub mod auth;
pub mod rbac;
