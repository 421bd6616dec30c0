//! Per-page call-to-action blocks, keyed by `page_name`.

use harva_core::defaults::{non_empty, PageCtaDefault};
use harva_core::types::{RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow, KeyedRow};
use crate::store::Record;

/// A row from the `page_cta_sections` table.
///
/// `label` is not stored; it is the editor caption for the page, filled in
/// on load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCta {
    pub id: Option<RowId>,
    pub page_name: String,
    pub label: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_url: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl From<&PageCtaDefault> for PageCta {
    fn from(d: &PageCtaDefault) -> Self {
        Self {
            page_name: d.page_name.to_string(),
            label: d.label.to_string(),
            title: d.title.to_string(),
            description: d.description.to_string(),
            button_text: non_empty(Some(d.button_text)),
            button_url: non_empty(Some(d.button_url)),
            ..Self::default()
        }
    }
}

impl ContentRow for PageCta {
    const TABLE: &'static str = "page_cta_sections";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "page_name": self.page_name,
            "title": self.title,
            "description": self.description,
            "image_url": non_empty(self.image_url.as_deref()),
            "button_text": non_empty(self.button_text.as_deref()),
            "button_url": non_empty(self.button_url.as_deref()),
        }))
    }
}

impl KeyedRow for PageCta {
    const KEY_COLUMN: &'static str = "page_name";

    fn key(&self) -> &str {
        &self.page_name
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCtaDraft {
    pub ctas: Vec<PageCta>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use harva_core::defaults::page_cta_default;

    #[test]
    fn test_payload_nulls_empty_optionals() {
        let cta = PageCta {
            page_name: "contact".into(),
            image_url: Some(String::new()),
            button_text: Some(String::new()),
            button_url: None,
            ..PageCta::default()
        };
        let payload = cta.payload();
        assert!(payload["image_url"].is_null());
        assert!(payload["button_text"].is_null());
        assert!(payload["button_url"].is_null());
        assert!(!payload.contains_key("label"));
    }

    #[test]
    fn test_from_default_without_button() {
        let cta = PageCta::from(page_cta_default("services_photobio").unwrap());
        assert_eq!(cta.key(), "services_photobio");
        assert!(cta.button_text.is_none());
        assert!(cta.id.is_none());
    }
}
