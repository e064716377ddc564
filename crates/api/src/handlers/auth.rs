//! Handler for the `/jwt` resource (token issuance).

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::auth::jwt::issue_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for `POST /jwt`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /jwt
///
/// Sign the request body into a bearer token. The body may be any JSON
/// object (clients send their user profile, with at least an `email`
/// field); its shape is not validated.
pub async fn issue(
    State(state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<Json<TokenResponse>> {
    let token = issue_token(payload, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token signing error: {e}")))?;

    Ok(Json(TokenResponse { token }))
}
