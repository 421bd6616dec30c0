use std::sync::Arc;

use harva_db::store::ContentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// The data API every section reads and writes through.
    pub store: Arc<dyn ContentStore>,
    /// Connection pool when the postgres backend is active (health checks).
    pub pool: Option<harva_db::DbPool>,
    pub config: Arc<ServerConfig>,
}
