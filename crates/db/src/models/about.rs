//! About section: the `about_section` singleton and its bullet list.

use harva_core::defaults::{
    non_empty, or_default, ABOUT_MISSION_ICON, ABOUT_MISSION_TITLE, ABOUT_SECTION_SUBTITLE,
    ABOUT_VISION_ICON, ABOUT_VISION_TITLE,
};
use harva_core::editable::{rank_of, EditableList, NewItem};
use harva_core::types::{Rank, RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow, RankedRow};
use crate::store::Record;

/// A row from the `about_section` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    pub id: Option<RowId>,
    pub section_subtitle: String,
    pub section_title: String,
    pub main_paragraph: String,
    pub mission_title: String,
    pub mission_text: String,
    pub mission_icon: String,
    pub vision_title: String,
    pub vision_text: String,
    pub vision_icon: String,
    pub image_1_url: Option<String>,
    pub image_2_url: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Default for AboutSection {
    fn default() -> Self {
        Self {
            id: None,
            section_subtitle: ABOUT_SECTION_SUBTITLE.to_string(),
            section_title: String::new(),
            main_paragraph: String::new(),
            mission_title: ABOUT_MISSION_TITLE.to_string(),
            mission_text: String::new(),
            mission_icon: ABOUT_MISSION_ICON.to_string(),
            vision_title: ABOUT_VISION_TITLE.to_string(),
            vision_text: String::new(),
            vision_icon: ABOUT_VISION_ICON.to_string(),
            image_1_url: None,
            image_2_url: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl ContentRow for AboutSection {
    const TABLE: &'static str = "about_section";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "section_subtitle": or_default(&self.section_subtitle, ABOUT_SECTION_SUBTITLE),
            "section_title": self.section_title,
            "main_paragraph": self.main_paragraph,
            "mission_title": or_default(&self.mission_title, ABOUT_MISSION_TITLE),
            "mission_text": self.mission_text,
            "mission_icon": or_default(&self.mission_icon, ABOUT_MISSION_ICON),
            "vision_title": or_default(&self.vision_title, ABOUT_VISION_TITLE),
            "vision_text": self.vision_text,
            "vision_icon": or_default(&self.vision_icon, ABOUT_VISION_ICON),
            "image_1_url": non_empty(self.image_1_url.as_deref()),
            "image_2_url": non_empty(self.image_2_url.as_deref()),
        }))
    }
}

/// A row from the `about_list_items` table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutListItem {
    pub id: Option<RowId>,
    pub about_id: Option<RowId>,
    pub text: String,
    pub display_order: Rank,
    pub created_at: Option<Timestamp>,
}

impl ContentRow for AboutListItem {
    const TABLE: &'static str = "about_list_items";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({ "text": self.text }))
    }
}

impl RankedRow for AboutListItem {
    fn rank(&self) -> Rank {
        self.display_order
    }
}

impl NewItem for AboutListItem {
    fn new_item(position: usize) -> Self {
        Self {
            display_order: rank_of(position),
            ..Self::default()
        }
    }
}

/// Editable state of the about section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutDraft {
    pub about: AboutSection,
    pub items: EditableList<AboutListItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_restores_default_titles() {
        let about = AboutSection {
            mission_title: String::new(),
            vision_icon: String::new(),
            section_title: "Who we are".into(),
            ..AboutSection::default()
        };
        let payload = about.payload();
        assert_eq!(payload["mission_title"], "Our Mission");
        assert_eq!(payload["vision_icon"], "document-text-outline");
        assert_eq!(payload["section_title"], "Who we are");
        assert!(payload["image_1_url"].is_null());
    }

    #[test]
    fn test_item_payload_is_text_only() {
        let item = AboutListItem {
            text: "Holistic care".into(),
            about_id: Some(RowId::new_v4()),
            ..AboutListItem::default()
        };
        assert_eq!(item.payload().len(), 1);
    }
}
