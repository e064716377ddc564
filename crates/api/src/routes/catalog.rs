//! Route definitions for the read-only catalog collections.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// ```text
/// GET /blogs          -> list_blogs
/// GET /products       -> list_products
/// GET /products/{id}  -> get_product
/// GET /history        -> list_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(catalog::list_blogs))
        .route("/products", get(catalog::list_products))
        .route("/products/{id}", get(catalog::get_product))
        .route("/history", get(catalog::list_history))
}
