//! Unauthenticated read-only content.

use axum::extract::State;
use axum::Json;
use harva_db::models::dashboard::Landing;
use harva_db::repositories::LandingRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/public/landing
pub async fn landing(State(state): State<AppState>) -> AppResult<Json<DataResponse<Landing>>> {
    let landing = LandingRepo::get(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: landing }))
}
