//! Repository for the `hero_section` and `hero_cards` tables.
//!
//! Unlike the other collections, hero cards are reconciled in place: cards
//! keep their ids across saves and removed cards are deleted individually.

use async_trait::async_trait;
use harva_core::section::SectionKind;
use harva_core::types::RowId;

use super::SectionRepo;
use crate::models::hero::{HeroCard, HeroDraft, HeroSection};
use crate::reconcile::{self, Scope};
use crate::store::{ContentStore, StoreError};

const HERO_PARENT_COLUMN: &str = "hero_id";

pub struct HeroRepo;

impl HeroRepo {
    /// Read the hero row and the cards that reference it, concurrently.
    pub async fn fetch(
        store: &dyn ContentStore,
    ) -> Result<(Option<HeroSection>, Vec<HeroCard>), StoreError> {
        let (hero, cards) = tokio::try_join!(
            reconcile::load_singleton::<HeroSection>(store),
            reconcile::load_collection::<HeroCard>(store, &Scope::All),
        )?;
        let cards = owned_by(hero.as_ref().and_then(|h| h.id), cards);
        Ok((hero, cards))
    }

    /// Delete a single card immediately. Returns whether it existed.
    pub async fn delete_card(store: &dyn ContentStore, id: RowId) -> Result<bool, StoreError> {
        reconcile::delete_by_id::<HeroCard>(store, id).await
    }
}

/// Keep the cards that reference `hero_id`, in rank order.
fn owned_by(hero_id: Option<RowId>, cards: Vec<HeroCard>) -> Vec<HeroCard> {
    match hero_id {
        Some(id) => cards
            .into_iter()
            .filter(|card| card.hero_id == Some(id))
            .collect(),
        None => Vec::new(),
    }
}

#[async_trait]
impl SectionRepo for HeroRepo {
    const KIND: SectionKind = SectionKind::Hero;
    type Draft = HeroDraft;

    async fn load(store: &dyn ContentStore) -> Result<HeroDraft, StoreError> {
        let (hero, cards) = Self::fetch(store).await?;
        Ok(HeroDraft {
            hero: hero.unwrap_or_default(),
            cards: cards.into(),
        })
    }

    async fn save(store: &dyn ContentStore, draft: &mut HeroDraft) -> Result<(), StoreError> {
        let hero_id = reconcile::save_singleton(store, &mut draft.hero).await?;
        reconcile::sync_in_place(
            store,
            &Scope::parent(HERO_PARENT_COLUMN, hero_id),
            &mut draft.cards,
        )
        .await
    }

    fn row_count(draft: &HeroDraft) -> usize {
        draft.cards.len()
    }
}
