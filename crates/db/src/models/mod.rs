//! Document models for the four collections.
//!
//! Wire field names follow the documents as stored (`displayName`,
//! `photoURL`, `_id`); Rust fields are snake_case with serde renames.
//! `_id` values serialize to hex strings in JSON responses.

use mongodb::bson::oid::ObjectId;
use serde::Serializer;

pub mod blog;
pub mod history;
pub mod product;
pub mod user;

/// Serialize an optional `ObjectId` as its 24-char hex string.
///
/// Only used for JSON responses; inserts never carry an id (the field is
/// skipped when `None` and the server generates `_id`).
pub fn serialize_opt_object_id_as_hex_string<S>(
    id: &Option<ObjectId>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => serializer.serialize_str(&id.to_hex()),
        None => serializer.serialize_none(),
    }
}
