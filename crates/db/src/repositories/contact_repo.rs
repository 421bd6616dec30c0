//! Repository for `contact_details` and `social_links`.

use async_trait::async_trait;
use harva_core::section::SectionKind;

use super::SectionRepo;
use crate::models::contact::{ContactDetails, ContactDraft, SocialLink};
use crate::reconcile::{self, Scope};
use crate::store::{ContentStore, StoreError};

pub struct ContactRepo;

#[async_trait]
impl SectionRepo for ContactRepo {
    const KIND: SectionKind = SectionKind::Contact;
    type Draft = ContactDraft;

    async fn load(store: &dyn ContentStore) -> Result<ContactDraft, StoreError> {
        let (contact, social_links) = tokio::try_join!(
            reconcile::load_singleton::<ContactDetails>(store),
            reconcile::load_collection::<SocialLink>(store, &Scope::All),
        )?;
        Ok(ContactDraft {
            contact: contact.unwrap_or_default(),
            social_links: social_links.into(),
        })
    }

    async fn save(store: &dyn ContentStore, draft: &mut ContactDraft) -> Result<(), StoreError> {
        reconcile::save_singleton(store, &mut draft.contact).await?;
        reconcile::replace_collection(store, &Scope::All, &draft.social_links).await?;
        Ok(())
    }

    fn row_count(draft: &ContactDraft) -> usize {
        draft.social_links.len()
    }
}
