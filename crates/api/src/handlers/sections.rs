//! Handlers for `/sections/{slug}`.
//!
//! Every section shares the same two handlers, instantiated per repository:
//! GET returns the section draft as currently stored (defaults filled in),
//! PUT replaces the stored section with the submitted draft and answers
//! with the refetched state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use harva_core::error::CoreError;
use harva_core::section::SectionKind;
use harva_core::types::RowId;
use harva_db::repositories::{HeroRepo, SectionRepo};
use harva_db::session::SectionSession;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireEditor};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/sections/{slug}
pub async fn get_section<R: SectionRepo>(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<R::Draft>>> {
    let session = SectionSession::<R>::open(state.store.clone()).await?;
    Ok(Json(DataResponse {
        data: session.into_draft(),
    }))
}

/// PUT /api/v1/sections/{slug}
///
/// Saves the whole draft. A failure part-way leaves the store with whatever
/// was written before it.
pub async fn put_section<R: SectionRepo>(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(draft): Json<R::Draft>,
) -> AppResult<Json<DataResponse<R::Draft>>> {
    let mut session = SectionSession::<R>::with_draft(state.store.clone(), draft);
    let rows = R::row_count(session.draft());

    if let Err(e) = session.save().await {
        tracing::warn!(
            section = R::KIND.slug(),
            user_id = %user.user_id,
            error = %e,
            "Section save failed",
        );
        return Err(e.into());
    }

    tracing::info!(
        section = R::KIND.slug(),
        user_id = %user.user_id,
        rows,
        "Section updated",
    );

    Ok(Json(DataResponse {
        data: session.into_draft(),
    }))
}

/// DELETE /api/v1/sections/hero/cards/{id}
///
/// Removes one hero card immediately, outside the draft save.
pub async fn delete_hero_card(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<RowId>,
) -> AppResult<StatusCode> {
    let deleted = HeroRepo::delete_card(state.store.as_ref(), id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "HeroCard",
            id,
        }));
    }
    tracing::info!(card_id = %id, user_id = %user.user_id, "Hero card deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for `/sections/{slug}` when no section route matched. Unknown
/// slugs are a validation error; a known slug without a route is a 404.
pub async fn unknown_section(Path(slug): Path<String>) -> AppResult<StatusCode> {
    SectionKind::from_slug(&slug)?;
    Ok(StatusCode::NOT_FOUND)
}
