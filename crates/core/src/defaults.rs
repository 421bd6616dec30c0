//! Built-in content defaults.
//!
//! A section with no stored row renders with these values, and a save
//! substitutes them for fields left empty in the draft.

// ---------------------------------------------------------------------------
// Singleton field defaults
// ---------------------------------------------------------------------------

pub const HERO_CTA_TEXT: &str = "Get in Touch";
pub const HERO_CTA_URL: &str = "#";

pub const ABOUT_SECTION_SUBTITLE: &str = "Why We Exist";
pub const ABOUT_MISSION_TITLE: &str = "Our Mission";
pub const ABOUT_MISSION_ICON: &str = "bonfire-outline";
pub const ABOUT_VISION_TITLE: &str = "Our Vision";
pub const ABOUT_VISION_ICON: &str = "document-text-outline";

pub const OBJECTIVES_SECTION_SUBTITLE: &str = "Our Objectives";

pub const PHOTOBIO_SECTION_SUBTITLE: &str = "Photobiomodulation Therapy";
pub const PHOTOBIO_CTA_TEXT: &str = "View More Services";

/// Author credited on photobiomodulation cards and service items.
pub const DEFAULT_AUTHOR: &str = "Harva Team";

/// Page a new service category belongs to.
pub const SERVICES_PAGE: &str = "services";

// ---------------------------------------------------------------------------
// New-item templates
// ---------------------------------------------------------------------------

pub const NEW_HERO_CARD_ICON: &str = "heart-outline";
pub const NEW_HERO_CARD_TITLE: &str = "New Title";
pub const NEW_HERO_CARD_SUBTITLE: &str = "New Subtitle";

pub const NEW_STATISTIC_NUMBER: &str = "0";

pub const NEW_OBJECTIVE_TITLE: &str = "New Objective";
pub const NEW_OBJECTIVE_ICON: &str = "leaf-outline";
pub const NEW_OBJECTIVE_POSITION: &str = "left";

pub const NEW_SOCIAL_PLATFORM: &str = "New Platform";
pub const NEW_SOCIAL_ICON: &str = "logo-facebook";

pub const NEW_FOOTER_LINK_SECTION: &str = "company_info";
pub const NEW_FOOTER_LINK_TEXT: &str = "New Link";

pub const NEW_LINK_URL: &str = "#";

pub const NEW_PHOTOBIO_CARD_TITLE: &str = "New Service";

pub const NEW_SERVICE_CATEGORY_TITLE: &str = "New Service Category";
pub const NEW_SERVICE_CATEGORY_SUBTITLE: &str = "Category description";
pub const NEW_SERVICE_ITEM_TITLE: &str = "New Service";

// ---------------------------------------------------------------------------
// Page CTAs
// ---------------------------------------------------------------------------

/// Default copy for one page's call-to-action block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCtaDefault {
    pub page_name: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub button_url: &'static str,
}

const CONSULTATION_TITLE: &str = "We offer online consultations";
const CONSULTATION_DESCRIPTION: &str = "Harva Group offers expert online health consultations \
    designed to support your wellness goals.";
const WHATSAPP_TEXT: &str = "Whatsapp message";
const WHATSAPP_URL: &str = "https://api.whatsapp.com/send?phone=27678833836";

/// The pages that carry a CTA block, in editor order.
pub const PAGE_CTA_DEFAULTS: [PageCtaDefault; 3] = [
    PageCtaDefault {
        page_name: "services_top",
        label: "Services Page - Top CTA",
        title: CONSULTATION_TITLE,
        description: CONSULTATION_DESCRIPTION,
        button_text: WHATSAPP_TEXT,
        button_url: WHATSAPP_URL,
    },
    PageCtaDefault {
        page_name: "services_photobio",
        label: "Services Page - Photobiomodulation CTA",
        title: "What is Photobiomodulation?",
        description: "Whole Body Vibration Plate: The vibration plate activates muscle \
            contractions that increase the body's energy demand.",
        button_text: "",
        button_url: "",
    },
    PageCtaDefault {
        page_name: "contact",
        label: "Contact Page - CTA",
        title: CONSULTATION_TITLE,
        description: CONSULTATION_DESCRIPTION,
        button_text: WHATSAPP_TEXT,
        button_url: WHATSAPP_URL,
    },
];

/// Look up the default CTA block for a page.
pub fn page_cta_default(page_name: &str) -> Option<&'static PageCtaDefault> {
    PAGE_CTA_DEFAULTS.iter().find(|d| d.page_name == page_name)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Return `value`, or `default` when `value` is empty.
pub fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Map an optional, possibly empty string to `None` when it carries nothing.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_default_substitutes_empty() {
        assert_eq!(or_default("", HERO_CTA_TEXT), "Get in Touch");
        assert_eq!(or_default("Book now", HERO_CTA_TEXT), "Book now");
    }

    #[test]
    fn test_or_default_keeps_whitespace() {
        assert_eq!(or_default(" ", "x"), " ");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("a")).as_deref(), Some("a"));
    }

    #[test]
    fn test_page_cta_defaults_are_unique() {
        assert_eq!(PAGE_CTA_DEFAULTS.len(), 3);
        assert!(page_cta_default("services_top").is_some());
        assert!(page_cta_default("contact").is_some());
        assert!(page_cta_default("pricing").is_none());
    }

    #[test]
    fn test_photobio_cta_has_no_button() {
        let d = page_cta_default("services_photobio").unwrap();
        assert!(d.button_text.is_empty());
        assert!(d.button_url.is_empty());
    }
}
