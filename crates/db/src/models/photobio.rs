//! Photobiomodulation section: settings plus the card grid.

use harva_core::defaults::{
    non_empty, or_default, DEFAULT_AUTHOR, NEW_PHOTOBIO_CARD_TITLE, PHOTOBIO_CTA_TEXT,
    PHOTOBIO_SECTION_SUBTITLE,
};
use harva_core::editable::{rank_of, EditableList, NewItem};
use harva_core::numeric::lenient_count;
use harva_core::types::{Rank, RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow, RankedRow};
use crate::store::Record;

/// A row from the `photobio_section_settings` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotobioSettings {
    pub id: Option<RowId>,
    pub section_subtitle: String,
    pub section_title: String,
    pub cta_text: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Default for PhotobioSettings {
    fn default() -> Self {
        Self {
            id: None,
            section_subtitle: PHOTOBIO_SECTION_SUBTITLE.to_string(),
            section_title: String::new(),
            cta_text: PHOTOBIO_CTA_TEXT.to_string(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl ContentRow for PhotobioSettings {
    const TABLE: &'static str = "photobio_section_settings";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "section_subtitle": or_default(&self.section_subtitle, PHOTOBIO_SECTION_SUBTITLE),
            "section_title": self.section_title,
            "cta_text": or_default(&self.cta_text, PHOTOBIO_CTA_TEXT),
        }))
    }
}

/// A row from the `photobiomodulation_cards` table.
///
/// `comments_count` accepts whatever the editor typed: numbers, numeric
/// strings, or junk (which reads as 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotobioCard {
    pub id: Option<RowId>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub author: String,
    #[serde(deserialize_with = "lenient_count")]
    pub comments_count: i32,
    pub display_order: Rank,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Default for PhotobioCard {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: None,
            image_url: None,
            author: DEFAULT_AUTHOR.to_string(),
            comments_count: 0,
            display_order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl ContentRow for PhotobioCard {
    const TABLE: &'static str = "photobiomodulation_cards";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "title": self.title,
            "description": self.description,
            "image_url": non_empty(self.image_url.as_deref()),
            "author": or_default(&self.author, DEFAULT_AUTHOR),
            "comments_count": self.comments_count,
        }))
    }
}

impl RankedRow for PhotobioCard {
    fn rank(&self) -> Rank {
        self.display_order
    }
}

impl NewItem for PhotobioCard {
    fn new_item(position: usize) -> Self {
        Self {
            title: NEW_PHOTOBIO_CARD_TITLE.to_string(),
            display_order: rank_of(position),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotobioDraft {
    pub settings: PhotobioSettings,
    pub cards: EditableList<PhotobioCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(count: serde_json::Value) -> PhotobioCard {
        serde_json::from_value(json!({"title": "Red light", "comments_count": count})).unwrap()
    }

    #[test]
    fn test_comments_count_coercion() {
        assert_eq!(card(json!(12)).comments_count, 12);
        assert_eq!(card(json!("7")).comments_count, 7);
        assert_eq!(card(json!("12 comments")).comments_count, 12);
        assert_eq!(card(json!("abc")).comments_count, 0);
        assert_eq!(card(json!(null)).comments_count, 0);
    }

    #[test]
    fn test_missing_author_falls_back() {
        let c = PhotobioCard {
            author: String::new(),
            ..card(json!(1))
        };
        assert_eq!(c.payload()["author"], "Harva Team");
        assert_eq!(card(json!(1)).author, "Harva Team");
    }
}
