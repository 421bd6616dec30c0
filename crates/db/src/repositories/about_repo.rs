//! Repository for the `about_section` and `about_list_items` tables.

use async_trait::async_trait;
use harva_core::section::SectionKind;

use super::SectionRepo;
use crate::models::about::{AboutDraft, AboutListItem, AboutSection};
use crate::reconcile::{self, Scope};
use crate::store::{ContentStore, StoreError};

pub struct AboutRepo;

#[async_trait]
impl SectionRepo for AboutRepo {
    const KIND: SectionKind = SectionKind::About;
    type Draft = AboutDraft;

    async fn load(store: &dyn ContentStore) -> Result<AboutDraft, StoreError> {
        let (about, items) = tokio::try_join!(
            reconcile::load_singleton::<AboutSection>(store),
            reconcile::load_collection::<AboutListItem>(store, &Scope::All),
        )?;
        let about = about.unwrap_or_default();
        let items = match about.id {
            Some(id) => items
                .into_iter()
                .filter(|item| item.about_id == Some(id))
                .collect(),
            None => Default::default(),
        };
        Ok(AboutDraft { about, items })
    }

    async fn save(store: &dyn ContentStore, draft: &mut AboutDraft) -> Result<(), StoreError> {
        let about_id = reconcile::save_singleton(store, &mut draft.about).await?;
        reconcile::replace_collection(store, &Scope::parent("about_id", about_id), &draft.items)
            .await?;
        Ok(())
    }

    fn row_count(draft: &AboutDraft) -> usize {
        draft.items.len()
    }
}
