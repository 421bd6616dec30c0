//! Repository for `footer_content` and `footer_links`.

use async_trait::async_trait;
use harva_core::section::SectionKind;

use super::SectionRepo;
use crate::models::footer::{FooterContent, FooterDraft, FooterLink};
use crate::reconcile::{self, Scope};
use crate::store::{ContentStore, StoreError};

pub struct FooterRepo;

#[async_trait]
impl SectionRepo for FooterRepo {
    const KIND: SectionKind = SectionKind::Footer;
    type Draft = FooterDraft;

    async fn load(store: &dyn ContentStore) -> Result<FooterDraft, StoreError> {
        let (footer, links) = tokio::try_join!(
            reconcile::load_singleton::<FooterContent>(store),
            reconcile::load_collection::<FooterLink>(store, &Scope::All),
        )?;
        Ok(FooterDraft {
            footer: footer.unwrap_or_default(),
            links: links.into(),
        })
    }

    async fn save(store: &dyn ContentStore, draft: &mut FooterDraft) -> Result<(), StoreError> {
        reconcile::save_singleton(store, &mut draft.footer).await?;
        reconcile::replace_collection(store, &Scope::All, &draft.links).await?;
        Ok(())
    }

    fn row_count(draft: &FooterDraft) -> usize {
        draft.links.len()
    }
}
