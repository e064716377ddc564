//! Handlers for the read-only catalog resources (products, blogs, history).
//!
//! All public, no guards: the catalog is browsable without an account.

use axum::extract::{Path, State};
use axum::Json;
use handimart_db::models::blog::Blog;
use handimart_db::models::history::HistoryEntry;
use handimart_db::models::product::Product;
use handimart_db::repositories::{BlogRepo, HistoryRepo, ProductRepo};
use mongodb::bson::oid::ObjectId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /products
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.db).await?;
    Ok(Json(products))
}

/// GET /products/{id}
///
/// Fetch a single product by its `_id`, or `null` when absent.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Product>>> {
    let id = ObjectId::parse_str(&id)
        .map_err(|_| AppError::BadRequest(format!("invalid product id: {id}")))?;

    let product = ProductRepo::find_by_id(&state.db, id).await?;
    Ok(Json(product))
}

/// GET /blogs
pub async fn list_blogs(State(state): State<AppState>) -> AppResult<Json<Vec<Blog>>> {
    let blogs = BlogRepo::list(&state.db).await?;
    Ok(Json(blogs))
}

/// GET /history
pub async fn list_history(State(state): State<AppState>) -> AppResult<Json<Vec<HistoryEntry>>> {
    let entries = HistoryRepo::list(&state.db).await?;
    Ok(Json(entries))
}
