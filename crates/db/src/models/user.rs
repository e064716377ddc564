//! User entity model and DTOs.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A document in the `users` collection.
///
/// `email` is the natural key: no two documents share one (enforced by a
/// registration pre-check, not an index). `role` is absent for ordinary
/// users and `"admin"` for administrators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::serialize_opt_object_id_as_hex_string"
    )]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// DTO for self-registration. The created document never carries a role.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

/// DTO for profile updates. Touches display name and photo URL only; the
/// email and role fields are never written through this path.
#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}
