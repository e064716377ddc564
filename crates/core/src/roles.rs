//! Well-known role name constants.
//!
//! Roles live on the user document's optional `role` field; a user with no
//! `role` field is an ordinary user.

pub const ROLE_ADMIN: &str = "admin";
