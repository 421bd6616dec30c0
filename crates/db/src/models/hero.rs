//! Hero section: the `hero_section` singleton and its `hero_cards`.

use harva_core::defaults::{
    non_empty, or_default, HERO_CTA_TEXT, HERO_CTA_URL, NEW_HERO_CARD_ICON, NEW_HERO_CARD_SUBTITLE,
    NEW_HERO_CARD_TITLE,
};
use harva_core::editable::{rank_of, EditableList, NewItem};
use harva_core::types::{Rank, RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow, RankedRow};
use crate::store::Record;

// ---------------------------------------------------------------------------
// Hero section
// ---------------------------------------------------------------------------

/// A row from the `hero_section` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSection {
    pub id: Option<RowId>,
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_url: String,
    pub hero_image_url: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            subtitle: String::new(),
            cta_text: HERO_CTA_TEXT.to_string(),
            cta_url: HERO_CTA_URL.to_string(),
            hero_image_url: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl ContentRow for HeroSection {
    const TABLE: &'static str = "hero_section";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "title": self.title,
            "subtitle": self.subtitle,
            "cta_text": or_default(&self.cta_text, HERO_CTA_TEXT),
            "cta_url": or_default(&self.cta_url, HERO_CTA_URL),
            "hero_image_url": non_empty(self.hero_image_url.as_deref()),
        }))
    }
}

// ---------------------------------------------------------------------------
// Hero cards
// ---------------------------------------------------------------------------

/// A row from the `hero_cards` table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroCard {
    pub id: Option<RowId>,
    pub hero_id: Option<RowId>,
    pub icon_name: String,
    pub subtitle: String,
    pub title: String,
    pub display_order: Rank,
    pub created_at: Option<Timestamp>,
}

impl HeroCard {
    pub fn new(icon_name: &str, subtitle: &str, title: &str) -> Self {
        Self {
            icon_name: icon_name.to_string(),
            subtitle: subtitle.to_string(),
            title: title.to_string(),
            ..Self::default()
        }
    }
}

impl ContentRow for HeroCard {
    const TABLE: &'static str = "hero_cards";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "icon_name": self.icon_name,
            "subtitle": self.subtitle,
            "title": self.title,
        }))
    }
}

impl RankedRow for HeroCard {
    fn rank(&self) -> Rank {
        self.display_order
    }
}

impl NewItem for HeroCard {
    fn new_item(position: usize) -> Self {
        Self {
            display_order: rank_of(position),
            ..Self::new(NEW_HERO_CARD_ICON, NEW_HERO_CARD_SUBTITLE, NEW_HERO_CARD_TITLE)
        }
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Editable state of the hero section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroDraft {
    pub hero: HeroSection,
    pub cards: EditableList<HeroCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hero_uses_cta_defaults() {
        let hero = HeroSection::default();
        assert_eq!(hero.cta_text, "Get in Touch");
        assert_eq!(hero.cta_url, "#");
    }

    #[test]
    fn test_payload_substitutes_empty_fields() {
        let hero = HeroSection {
            cta_text: String::new(),
            cta_url: String::new(),
            hero_image_url: Some(String::new()),
            ..HeroSection::default()
        };
        let payload = hero.payload();
        assert_eq!(payload["cta_text"], "Get in Touch");
        assert_eq!(payload["cta_url"], "#");
        assert!(payload["hero_image_url"].is_null());
        assert!(!payload.contains_key("id"));
    }

    #[test]
    fn test_card_payload_excludes_rank_and_parent() {
        let card = HeroCard {
            hero_id: Some(RowId::new_v4()),
            display_order: 3,
            ..HeroCard::new("heart-outline", "S", "T")
        };
        let payload = card.payload();
        assert_eq!(payload.len(), 3);
        assert_eq!(payload["icon_name"], "heart-outline");
    }

    #[test]
    fn test_new_card_template() {
        let card = HeroCard::new_item(2);
        assert_eq!(card.icon_name, "heart-outline");
        assert_eq!(card.title, "New Title");
        assert_eq!(card.subtitle, "New Subtitle");
        assert_eq!(card.display_order, 2);
        assert!(card.id.is_none());
    }

    #[test]
    fn test_draft_accepts_partial_body() {
        let draft: HeroDraft =
            serde_json::from_value(json!({"hero": {"title": "Welcome"}})).unwrap();
        assert_eq!(draft.hero.title, "Welcome");
        assert_eq!(draft.hero.cta_text, "Get in Touch");
        assert!(draft.cards.is_empty());
    }
}
