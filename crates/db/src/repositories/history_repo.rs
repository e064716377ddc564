//! Repository for the `history` collection (read-only).

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::models::history::HistoryEntry;

const COLLECTION: &str = "history";

/// Read operations for history entries.
pub struct HistoryRepo;

impl HistoryRepo {
    fn collection(db: &Database) -> Collection<HistoryEntry> {
        db.collection(COLLECTION)
    }

    /// List all history entries.
    pub async fn list(db: &Database) -> Result<Vec<HistoryEntry>, mongodb::error::Error> {
        Self::collection(db).find(doc! {}).await?.try_collect().await
    }
}
