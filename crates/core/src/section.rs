//! The catalogue of editable content sections.
//!
//! Each section is one logical content area of the site, backed by a
//! singleton row, an ordered collection, or both. The catalogue drives the
//! navigation sidebar and the `/sections/{slug}` routes.

use serde::Serialize;

use crate::error::CoreError;

/// One editable content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    About,
    Statistics,
    Objectives,
    Cta,
    Photobio,
    Contact,
    Footer,
    SiteSettings,
    PageCtas,
    Services,
}

impl SectionKind {
    /// All sections in sidebar order.
    pub const ALL: [SectionKind; 11] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Statistics,
        SectionKind::Objectives,
        SectionKind::Cta,
        SectionKind::Services,
        SectionKind::PageCtas,
        SectionKind::Photobio,
        SectionKind::Contact,
        SectionKind::Footer,
        SectionKind::SiteSettings,
    ];

    /// URL slug used under `/sections/`.
    pub fn slug(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Statistics => "statistics",
            SectionKind::Objectives => "objectives",
            SectionKind::Cta => "cta",
            SectionKind::Photobio => "photobio",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
            SectionKind::SiteSettings => "site-settings",
            SectionKind::PageCtas => "page-ctas",
            SectionKind::Services => "services",
        }
    }

    /// Human-readable label shown in the navigation sidebar.
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Hero => "Hero Section",
            SectionKind::About => "About Section",
            SectionKind::Statistics => "Statistics",
            SectionKind::Objectives => "Objectives",
            SectionKind::Cta => "CTA Section",
            SectionKind::Photobio => "Photobiomodulation",
            SectionKind::Contact => "Contact Details",
            SectionKind::Footer => "Footer Content",
            SectionKind::SiteSettings => "Site Settings",
            SectionKind::PageCtas => "Page CTAs",
            SectionKind::Services => "Services",
        }
    }

    /// Backend tables the section reads and writes, singleton first.
    pub fn tables(self) -> &'static [&'static str] {
        match self {
            SectionKind::Hero => &["hero_section", "hero_cards"],
            SectionKind::About => &["about_section", "about_list_items"],
            SectionKind::Statistics => &["statistics"],
            SectionKind::Objectives => &["objectives_section_settings", "objectives"],
            SectionKind::Cta => &["cta_section"],
            SectionKind::Photobio => &["photobio_section_settings", "photobiomodulation_cards"],
            SectionKind::Contact => &["contact_details", "social_links"],
            SectionKind::Footer => &["footer_content", "footer_links"],
            SectionKind::SiteSettings => &["site_settings"],
            SectionKind::PageCtas => &["page_cta_sections"],
            SectionKind::Services => &["service_categories", "service_items"],
        }
    }

    /// Resolve a section from its URL slug.
    pub fn from_slug(slug: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == slug)
            .ok_or_else(|| CoreError::Validation(format!("Unknown section '{slug}'")))
    }
}

/// A navigation entry as rendered by the dashboard sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub section: SectionKind,
    pub slug: &'static str,
    pub label: &'static str,
    pub path: String,
}

/// Build the sidebar navigation for every section.
pub fn navigation() -> Vec<NavEntry> {
    SectionKind::ALL
        .into_iter()
        .map(|kind| NavEntry {
            section: kind,
            slug: kind.slug(),
            label: kind.label(),
            path: format!("/sections/{}", kind.slug()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_slug(kind.slug()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_slug_is_rejected() {
        let err = SectionKind::from_slug("pricing").unwrap_err();
        assert!(err.to_string().contains("pricing"));
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = SectionKind::ALL.iter().map(|k| k.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SectionKind::ALL.len());
    }

    #[test]
    fn test_navigation_covers_every_section() {
        let nav = navigation();
        assert_eq!(nav.len(), 11);
        assert_eq!(nav[0].path, "/sections/hero");
        assert_eq!(nav[0].label, "Hero Section");
    }

    #[test]
    fn test_collection_sections_list_two_tables() {
        assert_eq!(SectionKind::Hero.tables(), &["hero_section", "hero_cards"]);
        assert_eq!(SectionKind::Statistics.tables().len(), 1);
    }
}
