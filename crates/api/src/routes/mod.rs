pub mod auth;
pub mod catalog;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree. All routes are mounted at the root; the
/// route table is the service's public contract.
///
/// ```text
/// POST  /jwt                   issue token (public)
///
/// GET   /users                 list users (auth + admin)
/// POST  /users                 self-registration (public)
/// GET   /users/{email}         fetch one user (auth)
/// PATCH /users/{email}         update profile (public)
/// GET   /users/admin/{email}   admin status, self only (auth)
/// PATCH /users/admin/{id}      promote to admin (auth + admin)
///
/// GET   /blogs                 list blogs (public)
/// GET   /products              list products (public)
/// GET   /products/{id}         fetch one product (public)
/// GET   /history               list history (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(users::router())
        .merge(catalog::router())
}
