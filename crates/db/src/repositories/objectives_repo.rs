//! Repository for `objectives_section_settings` and `objectives`.

use async_trait::async_trait;
use harva_core::section::SectionKind;

use super::SectionRepo;
use crate::models::objectives::{Objective, ObjectivesDraft, ObjectivesSettings};
use crate::reconcile::{self, Scope};
use crate::store::{ContentStore, StoreError};

pub struct ObjectivesRepo;

#[async_trait]
impl SectionRepo for ObjectivesRepo {
    const KIND: SectionKind = SectionKind::Objectives;
    type Draft = ObjectivesDraft;

    async fn load(store: &dyn ContentStore) -> Result<ObjectivesDraft, StoreError> {
        let (settings, objectives) = tokio::try_join!(
            reconcile::load_singleton::<ObjectivesSettings>(store),
            reconcile::load_collection::<Objective>(store, &Scope::All),
        )?;
        Ok(ObjectivesDraft {
            settings: settings.unwrap_or_default(),
            objectives: objectives.into(),
        })
    }

    async fn save(
        store: &dyn ContentStore,
        draft: &mut ObjectivesDraft,
    ) -> Result<(), StoreError> {
        reconcile::save_singleton(store, &mut draft.settings).await?;
        reconcile::replace_collection(store, &Scope::All, &draft.objectives).await?;
        Ok(())
    }

    fn row_count(draft: &ObjectivesDraft) -> usize {
        draft.objectives.len()
    }
}
