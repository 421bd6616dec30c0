//! Site-wide metadata (`site_settings`).

use harva_core::defaults::non_empty;
use harva_core::types::{RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow};
use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub id: Option<RowId>,
    pub site_title: String,
    pub site_description: String,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl ContentRow for SiteSettings {
    const TABLE: &'static str = "site_settings";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "site_title": self.site_title,
            "site_description": self.site_description,
            "logo_url": non_empty(self.logo_url.as_deref()),
            "favicon_url": non_empty(self.favicon_url.as_deref()),
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettingsDraft {
    pub settings: SiteSettings,
}
