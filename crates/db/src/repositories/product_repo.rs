//! Repository for the `products` collection (read-only).

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::models::product::Product;

const COLLECTION: &str = "products";

/// Read operations for products.
pub struct ProductRepo;

impl ProductRepo {
    fn collection(db: &Database) -> Collection<Product> {
        db.collection(COLLECTION)
    }

    /// List all products.
    pub async fn list(db: &Database) -> Result<Vec<Product>, mongodb::error::Error> {
        Self::collection(db).find(doc! {}).await?.try_collect().await
    }

    /// Find a product by its `_id`.
    pub async fn find_by_id(
        db: &Database,
        id: ObjectId,
    ) -> Result<Option<Product>, mongodb::error::Error> {
        Self::collection(db).find_one(doc! { "_id": id }).await
    }
}
