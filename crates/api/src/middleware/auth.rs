//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use handimart_core::error::CoreError;

use crate::auth::jwt::{validate_token, Claims};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(email = ?user.claims.email(), "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Rejections carry the exact messages the API contract fixes: a missing
/// header is 401 `forbidden access`; a header that does not yield a
/// verifiable token is 401 `unauthorized access`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The decoded token claims (caller payload plus `exp`/`iat`/`jti`).
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("forbidden access".into()))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("unauthorized access".into()))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("unauthorized access".into()))
        })?;

        Ok(AuthUser { claims })
    }
}
