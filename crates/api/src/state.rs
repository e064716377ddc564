use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the database handle is reference-counted internally
/// and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared MongoDB database handle.
    pub db: mongodb::Database,
    /// Server configuration (read by middleware and handlers).
    pub config: Arc<ServerConfig>,
}
