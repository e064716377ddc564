//! Domain error taxonomy.
//!
//! Each variant carries the human-readable message that ends up in the HTTP
//! error body. The api crate maps variants to status codes in its
//! `IntoResponse` impl.

/// Domain-level error.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Missing, malformed, or expired credential (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Valid credential but insufficient privilege or identity mismatch (403).
    #[error("{0}")]
    Forbidden(String),

    /// Referenced entity absent (404).
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure with a caller-safe message (500).
    #[error("{0}")]
    Internal(String),
}
