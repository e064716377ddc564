//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the verified token claims from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires an admin user per the users collection.
//! - [`rbac::RequireAuth`] -- Requires any authenticated caller.

pub mod auth;
pub mod rbac;
