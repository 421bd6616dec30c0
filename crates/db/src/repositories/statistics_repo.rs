//! Repository for the `statistics` table.

use async_trait::async_trait;
use harva_core::section::SectionKind;

use super::SectionRepo;
use crate::models::statistics::{Statistic, StatisticsDraft};
use crate::reconcile::{self, Scope};
use crate::store::{ContentStore, StoreError};

pub struct StatisticsRepo;

#[async_trait]
impl SectionRepo for StatisticsRepo {
    const KIND: SectionKind = SectionKind::Statistics;
    type Draft = StatisticsDraft;

    async fn load(store: &dyn ContentStore) -> Result<StatisticsDraft, StoreError> {
        let statistics = reconcile::load_collection::<Statistic>(store, &Scope::All).await?;
        Ok(StatisticsDraft {
            statistics: statistics.into(),
        })
    }

    async fn save(
        store: &dyn ContentStore,
        draft: &mut StatisticsDraft,
    ) -> Result<(), StoreError> {
        reconcile::replace_collection(store, &Scope::All, &draft.statistics).await?;
        Ok(())
    }

    fn row_count(draft: &StatisticsDraft) -> usize {
        draft.statistics.len()
    }
}
