//! Repository for `service_categories` and `service_items`.
//!
//! Saving replaces the whole catalogue: all items, then all categories are
//! deleted, and each category is reinserted followed by its items so the
//! items can reference the category's new id.

use async_trait::async_trait;
use harva_core::section::SectionKind;
use serde_json::Value;

use super::SectionRepo;
use crate::models::services::{group_items, ServiceCategory, ServiceItem, ServicesDraft};
use crate::models::{ContentRow, RankedRow};
use crate::reconcile::{self, Scope};
use crate::store::{ContentStore, StoreError};

pub struct ServicesRepo;

#[async_trait]
impl SectionRepo for ServicesRepo {
    const KIND: SectionKind = SectionKind::Services;
    type Draft = ServicesDraft;

    async fn load(store: &dyn ContentStore) -> Result<ServicesDraft, StoreError> {
        let (categories, items) = tokio::try_join!(
            reconcile::load_collection::<ServiceCategory>(store, &Scope::All),
            reconcile::load_collection::<ServiceItem>(store, &Scope::All),
        )?;
        Ok(ServicesDraft {
            categories: group_items(categories, items),
        })
    }

    async fn save(store: &dyn ContentStore, draft: &mut ServicesDraft) -> Result<(), StoreError> {
        let items_removed = store
            .delete(ServiceItem::TABLE, &[Scope::All.filter()])
            .await?;
        let categories_removed = store
            .delete(ServiceCategory::TABLE, &[Scope::All.filter()])
            .await?;
        tracing::debug!(categories_removed, items_removed, "Cleared service catalogue");

        for (rank, entry) in draft.categories.ranked() {
            let mut record = entry.category.payload();
            record.insert(ServiceCategory::RANK_COLUMN.to_string(), Value::from(rank));

            let inserted = reconcile::insert_one(store, ServiceCategory::TABLE, record).await;
            let category_id = match inserted {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!(
                        rank,
                        error = %e,
                        "Category insert failed; service catalogue left partial",
                    );
                    return Err(e);
                }
            };

            let rows = reconcile::ranked_payloads(
                &Scope::parent("category_id", category_id),
                &entry.items,
            );
            if !rows.is_empty() {
                store.insert(ServiceItem::TABLE, rows).await?;
            }
        }

        tracing::debug!(categories = draft.categories.len(), "Reinserted service catalogue");
        Ok(())
    }

    fn row_count(draft: &ServicesDraft) -> usize {
        draft.categories.iter().map(|c| 1 + c.items.len()).sum()
    }
}
