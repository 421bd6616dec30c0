//! Route definitions for the `/sections` resource.

use axum::routing::{any, delete, get};
use axum::Router;
use harva_db::repositories::{
    AboutRepo, ContactRepo, CtaRepo, FooterRepo, HeroRepo, ObjectivesRepo, PageCtaRepo,
    PhotobioRepo, SectionRepo, ServicesRepo, SiteSettingsRepo, StatisticsRepo,
};

use crate::handlers::sections;
use crate::state::AppState;

/// Routes mounted at `/sections`.
///
/// ```text
/// GET, PUT  /hero                 -> get_section, put_section
/// DELETE    /hero/cards/{id}      -> delete_hero_card
/// GET, PUT  /about
/// GET, PUT  /statistics
/// GET, PUT  /objectives
/// GET, PUT  /cta
/// GET, PUT  /photobio
/// GET, PUT  /contact
/// GET, PUT  /footer
/// GET, PUT  /site-settings
/// GET, PUT  /page-ctas
/// GET, PUT  /services
/// ANY       /{slug}               -> unknown_section
/// ```
///
/// GET requires any signed-in user; PUT and DELETE require editor or admin.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(section::<HeroRepo>())
        .merge(section::<AboutRepo>())
        .merge(section::<StatisticsRepo>())
        .merge(section::<ObjectivesRepo>())
        .merge(section::<CtaRepo>())
        .merge(section::<PhotobioRepo>())
        .merge(section::<ContactRepo>())
        .merge(section::<FooterRepo>())
        .merge(section::<SiteSettingsRepo>())
        .merge(section::<PageCtaRepo>())
        .merge(section::<ServicesRepo>())
        .route("/hero/cards/{id}", delete(sections::delete_hero_card))
        .route("/{slug}", any(sections::unknown_section))
}

/// GET and PUT for one section, at `/{R::KIND.slug()}`.
fn section<R: SectionRepo>() -> Router<AppState> {
    Router::new().route(
        &format!("/{}", R::KIND.slug()),
        get(sections::get_section::<R>).put(sections::put_section::<R>),
    )
}
