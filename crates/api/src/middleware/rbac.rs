//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests that do not meet
//! the requirement, so authorization is enforced at the type level in route
//! handlers. [`RequireAdmin`] resolves the caller's role from the users
//! collection on every request; the token itself carries no role claim.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use handimart_core::error::CoreError;
use handimart_core::roles::ROLE_ADMIN;
use handimart_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an admin user. Rejects with 403 Forbidden otherwise.
///
/// Runs [`AuthUser`] first, then looks up the token's email in the users
/// collection; a missing email claim, an unknown user, and a non-admin role
/// all reject identically.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let Some(email) = user.claims.email() else {
            return Err(AppError::Core(CoreError::Forbidden(
                "forbidden access".into(),
            )));
        };

        let found = UserRepo::find_by_email(&state.db, email).await?;
        let is_admin = found.and_then(|u| u.role).as_deref() == Some(ROLE_ADMIN);
        if !is_admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "forbidden access".into(),
            )));
        }

        Ok(RequireAdmin(user))
    }
}

/// Requires any authenticated caller (a verifiable token, no role check).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
