//! Product catalog entity. Read-only from this service's perspective.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// A document in the `products` collection.
///
/// Beyond `_id` the catalog schema is owned elsewhere, so the remaining
/// fields pass through as an opaque document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub fields: Document,
}
