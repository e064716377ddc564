//! Repository for the `users` collection.

use futures::TryStreamExt;
use handimart_core::roles::ROLE_ADMIN;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_bson};
use mongodb::results::{InsertOneResult, UpdateResult};
use mongodb::{Collection, Database};

use crate::models::user::{CreateUser, ProfileUpdate, User};

const COLLECTION: &str = "users";

/// CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    fn collection(db: &Database) -> Collection<User> {
        db.collection(COLLECTION)
    }

    /// List all users.
    pub async fn list(db: &Database) -> Result<Vec<User>, mongodb::error::Error> {
        Self::collection(db).find(doc! {}).await?.try_collect().await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(
        db: &Database,
        email: &str,
    ) -> Result<Option<User>, mongodb::error::Error> {
        Self::collection(db).find_one(doc! { "email": email }).await
    }

    /// Insert a new user document. The server generates `_id`; the created
    /// user has no role.
    pub async fn insert(
        db: &Database,
        input: CreateUser,
    ) -> Result<InsertOneResult, mongodb::error::Error> {
        let user = User {
            id: None,
            email: input.email,
            display_name: input.display_name,
            photo_url: input.photo_url,
            role: None,
        };
        Self::collection(db).insert_one(user).await
    }

    /// Overwrite `displayName` and `photoURL` for the user with the given
    /// email. Upsert stays off so a missing user surfaces as
    /// `matched_count == 0` instead of being created.
    pub async fn update_profile(
        db: &Database,
        email: &str,
        input: &ProfileUpdate,
    ) -> Result<UpdateResult, mongodb::error::Error> {
        let update = doc! {
            "$set": {
                "displayName": to_bson(&input.display_name)?,
                "photoURL": to_bson(&input.photo_url)?,
            }
        };
        Self::collection(db)
            .update_one(doc! { "email": email }, update)
            .await
    }

    /// Set `role = "admin"` on the user with the given id.
    pub async fn promote_to_admin(
        db: &Database,
        id: ObjectId,
    ) -> Result<UpdateResult, mongodb::error::Error> {
        Self::collection(db)
            .update_one(doc! { "_id": id }, doc! { "$set": { "role": ROLE_ADMIN } })
            .await
    }
}
