//! Repository for the `site_settings` table.

use async_trait::async_trait;
use harva_core::section::SectionKind;

use super::SectionRepo;
use crate::models::site_settings::{SiteSettings, SiteSettingsDraft};
use crate::reconcile;
use crate::store::{ContentStore, StoreError};

pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// The stored settings, or empty defaults.
    pub async fn get(store: &dyn ContentStore) -> Result<SiteSettings, StoreError> {
        Ok(reconcile::load_singleton::<SiteSettings>(store)
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl SectionRepo for SiteSettingsRepo {
    const KIND: SectionKind = SectionKind::SiteSettings;
    type Draft = SiteSettingsDraft;

    async fn load(store: &dyn ContentStore) -> Result<SiteSettingsDraft, StoreError> {
        Ok(SiteSettingsDraft {
            settings: Self::get(store).await?,
        })
    }

    async fn save(
        store: &dyn ContentStore,
        draft: &mut SiteSettingsDraft,
    ) -> Result<(), StoreError> {
        reconcile::save_singleton(store, &mut draft.settings).await?;
        Ok(())
    }

    fn row_count(_draft: &SiteSettingsDraft) -> usize {
        0
    }
}
