//! Repository for the `blogs` collection (read-only).

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::models::blog::Blog;

const COLLECTION: &str = "blogs";

/// Read operations for blogs.
pub struct BlogRepo;

impl BlogRepo {
    fn collection(db: &Database) -> Collection<Blog> {
        db.collection(COLLECTION)
    }

    /// List all blogs.
    pub async fn list(db: &Database) -> Result<Vec<Blog>, mongodb::error::Error> {
        Self::collection(db).find(doc! {}).await?.try_collect().await
    }
}
