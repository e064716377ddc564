//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET   /users                 -> list (admin)
/// POST  /users                 -> register
/// GET   /users/{email}         -> get_by_email (auth)
/// PATCH /users/{email}         -> update_profile
/// GET   /users/admin/{email}   -> admin_status (auth, self only)
/// PATCH /users/admin/{email}   -> promote (admin; the param is an ObjectId)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list).post(users::register))
        .route(
            "/users/{email}",
            get(users::get_by_email).patch(users::update_profile),
        )
        .route(
            "/users/admin/{email}",
            get(users::admin_status).patch(users::promote),
        )
}
