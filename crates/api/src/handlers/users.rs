//! Handlers for the `/users` resource.
//!
//! Registration and profile update are deliberately unauthenticated:
//! registration has to work before a token exists, and the profile-update
//! route ships without a guard. Listing requires an admin; single-user
//! reads require authentication.

use axum::extract::{Path, State};
use axum::Json;
use handimart_core::error::CoreError;
use handimart_core::roles::ROLE_ADMIN;
use handimart_db::models::user::{CreateUser, ProfileUpdate, User};
use handimart_db::repositories::UserRepo;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `GET /users/admin/{email}`.
#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

/// Plain confirmation message body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Response body for `POST /users`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RegisterResponse {
    /// The email is already registered; nothing was inserted and
    /// `insertedId` serializes as `null`.
    AlreadyExists {
        message: &'static str,
        #[serde(rename = "insertedId")]
        inserted_id: Option<String>,
    },
    /// A new user document was created.
    Created {
        acknowledged: bool,
        #[serde(rename = "insertedId")]
        inserted_id: String,
    },
}

/// Response body for `PATCH /users/admin/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub acknowledged: bool,
    #[serde(rename = "matchedCount")]
    pub matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /users
///
/// List all users. Admin only.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.db).await?;
    Ok(Json(users))
}

/// GET /users/{email}
///
/// Fetch a single user by email, or `null` when absent. Requires
/// authentication but not any particular identity.
pub async fn get_by_email(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(email): Path<String>,
) -> AppResult<Json<Option<User>>> {
    let user = UserRepo::find_by_email(&state.db, &email).await?;
    Ok(Json(user))
}

/// GET /users/admin/{email}
///
/// Report whether the given user is an admin. Callers may only ask about
/// themselves: the path email must equal the token's email, checked before
/// any store access.
pub async fn admin_status(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(email): Path<String>,
) -> AppResult<Json<AdminStatusResponse>> {
    if user.claims.email() != Some(email.as_str()) {
        return Err(AppError::Core(CoreError::Forbidden(
            "forbidden access".into(),
        )));
    }

    let found = UserRepo::find_by_email(&state.db, &email).await?;
    let admin = found.and_then(|u| u.role).as_deref() == Some(ROLE_ADMIN);

    Ok(Json(AdminStatusResponse { admin }))
}

/// PATCH /users/{email}
///
/// Update `displayName` and `photoURL` only. No upsert: an unknown email is
/// a 404 and the store stays unmodified.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(input): Json<ProfileUpdate>,
) -> AppResult<Json<MessageResponse>> {
    let result = UserRepo::update_profile(&state.db, &email, &input)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, email = %email, "Profile update failed");
            AppError::Core(CoreError::Internal("Failed to update profile".into()))
        })?;

    if result.matched_count == 0 {
        return Err(AppError::Core(CoreError::NotFound("User not found".into())));
    }

    Ok(Json(MessageResponse {
        message: "User profile updated successfully",
    }))
}

/// POST /users
///
/// Self-registration. An already-registered email is a no-op success with
/// `insertedId: null`; the pre-check and the insert are two separate store
/// calls, so concurrent identical registrations can both land.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<Json<RegisterResponse>> {
    if UserRepo::find_by_email(&state.db, &input.email)
        .await?
        .is_some()
    {
        return Ok(Json(RegisterResponse::AlreadyExists {
            message: "User already exists",
            inserted_id: None,
        }));
    }

    let result = UserRepo::insert(&state.db, input).await?;
    let inserted_id = result
        .inserted_id
        .as_object_id()
        .map(|id| id.to_hex())
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Unexpected insertedId type: {:?}",
                result.inserted_id
            ))
        })?;

    Ok(Json(RegisterResponse::Created {
        acknowledged: true,
        inserted_id,
    }))
}

/// PATCH /users/admin/{id}
///
/// Promote the user with the given id to admin. Admin only; touches the
/// `role` field and nothing else.
pub async fn promote(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateResponse>> {
    let id = ObjectId::parse_str(&id)
        .map_err(|_| AppError::BadRequest(format!("invalid user id: {id}")))?;

    let result = UserRepo::promote_to_admin(&state.db, id).await?;

    Ok(Json(UpdateResponse {
        acknowledged: true,
        matched_count: result.matched_count,
        modified_count: result.modified_count,
    }))
}
