//! Repository for the `cta_section` table.

use async_trait::async_trait;
use harva_core::section::SectionKind;

use super::SectionRepo;
use crate::models::cta::{CtaDraft, CtaSection};
use crate::reconcile;
use crate::store::{ContentStore, StoreError};

pub struct CtaRepo;

#[async_trait]
impl SectionRepo for CtaRepo {
    const KIND: SectionKind = SectionKind::Cta;
    type Draft = CtaDraft;

    async fn load(store: &dyn ContentStore) -> Result<CtaDraft, StoreError> {
        let cta = reconcile::load_singleton::<CtaSection>(store).await?;
        Ok(CtaDraft {
            cta: cta.unwrap_or_default(),
        })
    }

    async fn save(store: &dyn ContentStore, draft: &mut CtaDraft) -> Result<(), StoreError> {
        reconcile::save_singleton(store, &mut draft.cta).await?;
        Ok(())
    }

    fn row_count(_draft: &CtaDraft) -> usize {
        0
    }
}
