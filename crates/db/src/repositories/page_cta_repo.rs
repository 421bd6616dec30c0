//! Repository for the `page_cta_sections` table.
//!
//! The editor always shows the known pages: stored rows override the
//! built-in copy for their page, and stored rows for pages without a
//! built-in entry are listed after them.

use async_trait::async_trait;
use harva_core::defaults::{page_cta_default, PAGE_CTA_DEFAULTS};
use harva_core::section::SectionKind;

use super::SectionRepo;
use crate::models::page_cta::{PageCta, PageCtaDraft};
use crate::models::ContentRow;
use crate::reconcile;
use crate::store::{fetch_all, ContentStore, Select, StoreError};

pub struct PageCtaRepo;

/// Overlay stored rows on the default page list.
fn merge_with_defaults(stored: Vec<PageCta>) -> Vec<PageCta> {
    let mut merged: Vec<PageCta> = PAGE_CTA_DEFAULTS
        .iter()
        .map(|default| {
            stored
                .iter()
                .find(|row| row.page_name == default.page_name)
                .cloned()
                .unwrap_or_else(|| PageCta::from(default))
        })
        .collect();

    merged.extend(
        stored
            .into_iter()
            .filter(|row| page_cta_default(&row.page_name).is_none()),
    );

    for cta in &mut merged {
        cta.label = page_cta_default(&cta.page_name)
            .map(|d| d.label.to_string())
            .unwrap_or_else(|| cta.page_name.clone());
    }
    merged
}

#[async_trait]
impl SectionRepo for PageCtaRepo {
    const KIND: SectionKind = SectionKind::PageCtas;
    type Draft = PageCtaDraft;

    async fn load(store: &dyn ContentStore) -> Result<PageCtaDraft, StoreError> {
        let stored: Vec<PageCta> =
            fetch_all(store, &Select::from(PageCta::TABLE).order_by("page_name")).await?;
        Ok(PageCtaDraft {
            ctas: merge_with_defaults(stored),
        })
    }

    async fn save(store: &dyn ContentStore, draft: &mut PageCtaDraft) -> Result<(), StoreError> {
        reconcile::upsert_by_key(store, &draft.ctas).await?;
        Ok(())
    }

    fn row_count(draft: &PageCtaDraft) -> usize {
        draft.ctas.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harva_core::types::RowId;

    fn stored(page: &str, title: &str) -> PageCta {
        PageCta {
            id: Some(RowId::new_v4()),
            page_name: page.into(),
            title: title.into(),
            ..PageCta::default()
        }
    }

    #[test]
    fn test_defaults_fill_missing_pages() {
        let merged = merge_with_defaults(vec![stored("contact", "Talk to us")]);
        let pages: Vec<&str> = merged.iter().map(|c| c.page_name.as_str()).collect();
        assert_eq!(pages, vec!["services_top", "services_photobio", "contact"]);
        assert_eq!(merged[2].title, "Talk to us");
        assert!(merged[0].id.is_none());
        assert_eq!(merged[2].label, "Contact Page - CTA");
    }

    #[test]
    fn test_unknown_pages_are_appended() {
        let merged = merge_with_defaults(vec![stored("pricing", "Plans")]);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged[3].page_name, "pricing");
        assert_eq!(merged[3].label, "pricing");
    }
}
