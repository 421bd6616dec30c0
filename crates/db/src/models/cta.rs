//! The landing page CTA banner (`cta_section`).

use harva_core::defaults::non_empty;
use harva_core::types::{RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow};
use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaSection {
    pub id: Option<RowId>,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl ContentRow for CtaSection {
    const TABLE: &'static str = "cta_section";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "title": self.title,
            "description": self.description,
            "image_url": non_empty(self.image_url.as_deref()),
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaDraft {
    pub cta: CtaSection,
}
