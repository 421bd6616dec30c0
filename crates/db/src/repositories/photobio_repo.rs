//! Repository for `photobio_section_settings` and `photobiomodulation_cards`.

use async_trait::async_trait;
use harva_core::section::SectionKind;

use super::SectionRepo;
use crate::models::photobio::{PhotobioCard, PhotobioDraft, PhotobioSettings};
use crate::reconcile::{self, Scope};
use crate::store::{ContentStore, StoreError};

pub struct PhotobioRepo;

#[async_trait]
impl SectionRepo for PhotobioRepo {
    const KIND: SectionKind = SectionKind::Photobio;
    type Draft = PhotobioDraft;

    async fn load(store: &dyn ContentStore) -> Result<PhotobioDraft, StoreError> {
        let (settings, cards) = tokio::try_join!(
            reconcile::load_singleton::<PhotobioSettings>(store),
            reconcile::load_collection::<PhotobioCard>(store, &Scope::All),
        )?;
        Ok(PhotobioDraft {
            settings: settings.unwrap_or_default(),
            cards: cards.into(),
        })
    }

    async fn save(store: &dyn ContentStore, draft: &mut PhotobioDraft) -> Result<(), StoreError> {
        reconcile::save_singleton(store, &mut draft.settings).await?;
        reconcile::replace_collection(store, &Scope::All, &draft.cards).await?;
        Ok(())
    }

    fn row_count(draft: &PhotobioDraft) -> usize {
        draft.cards.len()
    }
}
