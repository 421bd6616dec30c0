use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Unauthenticated routes mounted at `/public`.
///
/// ```text
/// GET  /landing   -> landing
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/landing", get(public::landing))
}
