//! Route definition for token issuance.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /jwt  -> issue
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/jwt", post(auth::issue))
}
