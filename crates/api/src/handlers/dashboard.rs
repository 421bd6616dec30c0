//! Handler for the dashboard overview.

use axum::extract::State;
use axum::Json;
use harva_core::roles::can_edit;
use harva_core::section::{navigation, NavEntry};
use harva_db::models::dashboard::ContentCounts;
use harva_db::repositories::DashboardRepo;
use serde::Serialize;

use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Sidebar, counters, and who is signed in.
#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub counts: ContentCounts,
    pub navigation: Vec<NavEntry>,
    pub user: DashboardUser,
    pub can_edit: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardUser {
    pub email: String,
    pub role: String,
}

impl From<&AuthUser> for DashboardUser {
    fn from(user: &AuthUser) -> Self {
        Self {
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// GET /api/v1/dashboard
///
/// Never fails on a count: unreadable tables count as 0.
pub async fn overview(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Json<DataResponse<DashboardOverview>> {
    let counts = DashboardRepo::counts(state.store.as_ref()).await;
    Json(DataResponse {
        data: DashboardOverview {
            counts,
            navigation: navigation(),
            user: DashboardUser::from(&user),
            can_edit: can_edit(&user.role),
        },
    })
}
