//! HTTP-level tests for token issuance and the auth/authz gates.
//!
//! Every test here exercises a path that rejects (or completes) before any
//! store access, so no MongoDB is needed.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, TEST_JWT_SECRET};
use handimart_api::auth::jwt::{validate_token, Claims, JwtConfig};
use jsonwebtoken::{encode, EncodingKey, Header};

/// Config matching the test app, for decoding issued tokens.
fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiry_hours: 24,
    }
}

/// Issue a token through the API for the given payload and return it.
async fn issue_token_via_api(payload: serde_json::Value) -> String {
    let app = common::build_test_app(common::test_db().await);
    let response = post_json(app, "/jwt", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("response must contain a token string")
        .to_string()
}

// ---------------------------------------------------------------------------
// Token issuance
// ---------------------------------------------------------------------------

/// POST /jwt signs the request body into a verifiable token that embeds the
/// payload verbatim.
#[tokio::test]
async fn test_jwt_issuance_round_trip() {
    let payload = serde_json::json!({
        "email": "weaver@example.com",
        "displayName": "Weaver",
    });

    let token = issue_token_via_api(payload.clone()).await;

    let claims = validate_token(&token, &test_jwt_config())
        .expect("issued token must validate with the same secret");
    assert_eq!(claims.email(), Some("weaver@example.com"));
    assert_eq!(claims.payload.get("displayName"), payload.get("displayName"));
    assert!(claims.exp > claims.iat);
}

// ---------------------------------------------------------------------------
// Authentication gate
// ---------------------------------------------------------------------------

/// A guarded route without an Authorization header returns 401 with the
/// contract's "forbidden access" message.
#[tokio::test]
async fn test_missing_authorization_header() {
    let app = common::build_test_app(common::test_db().await);
    let response = get(app, "/users").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "forbidden access");
}

/// A garbage bearer token returns 401 with the "unauthorized access" message.
#[tokio::test]
async fn test_malformed_token() {
    let app = common::build_test_app(common::test_db().await);
    let response = get_auth(app, "/users", "not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "unauthorized access");
}

/// An Authorization header without the Bearer scheme is treated as a failed
/// verification, not a missing header.
#[tokio::test]
async fn test_non_bearer_authorization_header() {
    let app = common::build_test_app(common::test_db().await);

    let request = axum::http::Request::builder()
        .method(axum::http::Method::GET)
        .uri("/users")
        .header(axum::http::header::AUTHORIZATION, "Token abc123")
        .body(axum::body::Body::empty())
        .expect("request should build");
    let response = tower::ServiceExt::oneshot(app, request)
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "unauthorized access");
}

/// An expired token is rejected exactly like a malformed one.
#[tokio::test]
async fn test_expired_token_rejected() {
    // Craft an already-expired token with the test secret.
    // Margin is well beyond the validator's 60-second leeway.
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        payload: serde_json::Map::from_iter([(
            "email".to_string(),
            serde_json::Value::String("late@example.com".to_string()),
        )]),
        exp: now - 300,
        iat: now - 600,
        jti: "expired-test-token".to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("encoding should succeed");

    let app = common::build_test_app(common::test_db().await);
    let response = get_auth(app, "/users/late@example.com", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "unauthorized access");
}

// ---------------------------------------------------------------------------
// Identity-match gate
// ---------------------------------------------------------------------------

/// GET /users/admin/{email} rejects with 403 when the path email differs
/// from the token's email. The check runs before any store access, so even
/// an actual admin asking about someone else is rejected.
#[tokio::test]
async fn test_admin_status_email_mismatch() {
    let token = issue_token_via_api(serde_json::json!({ "email": "a@example.com" })).await;

    let app = common::build_test_app(common::test_db().await);
    let response = get_auth(app, "/users/admin/b@example.com", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["message"], "forbidden access");
}
