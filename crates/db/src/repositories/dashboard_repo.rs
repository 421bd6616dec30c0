//! Row counts for the dashboard overview.

use crate::models::dashboard::ContentCounts;
use crate::reconcile::Scope;
use crate::store::ContentStore;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Count the main collections concurrently. A failed count is logged and
    /// reported as 0 rather than failing the overview.
    pub async fn counts(store: &dyn ContentStore) -> ContentCounts {
        let (hero_cards, statistics, objectives, photobio_cards) = tokio::join!(
            count_or_zero(store, "hero_cards"),
            count_or_zero(store, "statistics"),
            count_or_zero(store, "objectives"),
            count_or_zero(store, "photobiomodulation_cards"),
        );
        ContentCounts {
            hero_cards,
            statistics,
            objectives,
            photobio_cards,
        }
    }
}

async fn count_or_zero(store: &dyn ContentStore, table: &str) -> i64 {
    match store.count(table, &[Scope::All.filter()]).await {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!(table, error = %e, "Dashboard count failed");
            0
        }
    }
}
