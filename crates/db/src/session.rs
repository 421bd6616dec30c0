//! The editing lifecycle of one section: load, edit locally, save, refetch.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::repositories::SectionRepo;
use crate::store::{ContentStore, StoreError};

/// A draft of section `R` bound to the store it was loaded from.
///
/// Edits go through [`draft_mut`](Self::draft_mut) and touch nothing but
/// memory. [`save`](Self::save) writes the draft and then replaces it with
/// a fresh read, so after a successful save the draft mirrors the store.
pub struct SectionSession<R: SectionRepo> {
    store: Arc<dyn ContentStore>,
    draft: R::Draft,
    _repo: PhantomData<fn() -> R>,
}

impl<R: SectionRepo> SectionSession<R> {
    /// Load the section into a new draft.
    pub async fn open(store: Arc<dyn ContentStore>) -> Result<Self, StoreError> {
        let draft = R::load(store.as_ref()).await?;
        Ok(Self::with_draft(store, draft))
    }

    /// Start from a draft supplied by the caller (e.g. a request body).
    pub fn with_draft(store: Arc<dyn ContentStore>, draft: R::Draft) -> Self {
        Self {
            store,
            draft,
            _repo: PhantomData,
        }
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    /// Persist the draft, then refetch it.
    ///
    /// On failure the draft keeps the local edits (and any ids assigned
    /// before the failing step); the store keeps whatever was written.
    pub async fn save(&mut self) -> Result<&R::Draft, StoreError> {
        R::save(self.store.as_ref(), &mut self.draft).await?;
        self.reload().await
    }

    /// Discard local edits and read the section again.
    pub async fn reload(&mut self) -> Result<&R::Draft, StoreError> {
        self.draft = R::load(self.store.as_ref()).await?;
        Ok(&self.draft)
    }

    pub fn into_draft(self) -> R::Draft {
        self.draft
    }
}
