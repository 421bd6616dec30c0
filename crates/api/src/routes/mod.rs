pub mod auth;
pub mod dashboard;
pub mod health;
pub mod public;
pub mod sections;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                    login (public)
/// /auth/session                  current session (requires auth)
///
/// /dashboard                     counts, navigation, user (requires auth)
///
/// /sections/{slug}               get (auth), put (editor or admin)
/// /sections/hero/cards/{id}      delete (editor or admin)
///
/// /public/landing                landing content (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
        .nest("/sections", sections::router())
        .nest("/public", public::router())
}
