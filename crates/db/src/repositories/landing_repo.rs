//! Read-only content for the public landing page.

use super::{HeroRepo, SiteSettingsRepo};
use crate::models::dashboard::Landing;
use crate::store::{ContentStore, StoreError};

pub struct LandingRepo;

impl LandingRepo {
    pub async fn get(store: &dyn ContentStore) -> Result<Landing, StoreError> {
        let ((hero, cards), settings) =
            tokio::try_join!(HeroRepo::fetch(store), SiteSettingsRepo::get(store))?;
        Ok(Landing {
            hero: hero.unwrap_or_default(),
            cards,
            site_title: settings.site_title,
            site_description: settings.site_description,
        })
    }
}
