//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers translate exactly one HTTP request into one repository call in
//! `handimart_db` and shape the response, mapping errors via `AppError`.

pub mod auth;
pub mod catalog;
pub mod users;
