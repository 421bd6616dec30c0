//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&dyn ContentStore` as the first argument. Section repositories
//! implement [`SectionRepo`], which is all the HTTP layer and
//! [`SectionSession`](crate::session::SectionSession) need to drive the
//! fetch -> edit -> save cycle.

pub mod about_repo;
pub mod contact_repo;
pub mod cta_repo;
pub mod dashboard_repo;
pub mod footer_repo;
pub mod hero_repo;
pub mod landing_repo;
pub mod objectives_repo;
pub mod page_cta_repo;
pub mod photobio_repo;
pub mod services_repo;
pub mod site_settings_repo;
pub mod statistics_repo;
pub mod user_repo;

pub use about_repo::AboutRepo;
pub use contact_repo::ContactRepo;
pub use cta_repo::CtaRepo;
pub use dashboard_repo::DashboardRepo;
pub use footer_repo::FooterRepo;
pub use hero_repo::HeroRepo;
pub use landing_repo::LandingRepo;
pub use objectives_repo::ObjectivesRepo;
pub use page_cta_repo::PageCtaRepo;
pub use photobio_repo::PhotobioRepo;
pub use services_repo::ServicesRepo;
pub use site_settings_repo::SiteSettingsRepo;
pub use statistics_repo::StatisticsRepo;
pub use user_repo::UserRepo;

use async_trait::async_trait;
use harva_core::section::SectionKind;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::{ContentStore, StoreError};

/// Fetch and persist one content section as a whole draft.
#[async_trait]
pub trait SectionRepo: Send + Sync + 'static {
    const KIND: SectionKind;

    /// The section's local edit state.
    type Draft: Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static;

    /// Read the section. Missing singletons come back as defaults.
    async fn load(store: &dyn ContentStore) -> Result<Self::Draft, StoreError>;

    /// Write the whole draft. Ids assigned to new singleton rows are stored
    /// back into `draft`.
    async fn save(store: &dyn ContentStore, draft: &mut Self::Draft) -> Result<(), StoreError>;

    /// Number of collection rows in the draft, for logging.
    fn row_count(draft: &Self::Draft) -> usize;
}
