//! Objectives: section settings plus the ordered objectives list.

use harva_core::defaults::{
    non_empty, or_default, NEW_OBJECTIVE_ICON, NEW_OBJECTIVE_POSITION, NEW_OBJECTIVE_TITLE,
    OBJECTIVES_SECTION_SUBTITLE,
};
use harva_core::editable::{rank_of, EditableList, NewItem};
use harva_core::types::{Rank, RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow, RankedRow};
use crate::store::Record;

/// A row from the `objectives_section_settings` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectivesSettings {
    pub id: Option<RowId>,
    pub section_subtitle: String,
    pub section_title: String,
    pub banner_image_url: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Default for ObjectivesSettings {
    fn default() -> Self {
        Self {
            id: None,
            section_subtitle: OBJECTIVES_SECTION_SUBTITLE.to_string(),
            section_title: String::new(),
            banner_image_url: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl ContentRow for ObjectivesSettings {
    const TABLE: &'static str = "objectives_section_settings";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "section_subtitle": or_default(&self.section_subtitle, OBJECTIVES_SECTION_SUBTITLE),
            "section_title": self.section_title,
            "banner_image_url": non_empty(self.banner_image_url.as_deref()),
        }))
    }
}

/// A row from the `objectives` table. `position` is the side of the banner
/// the objective renders on (`left` / `right`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Objective {
    pub id: Option<RowId>,
    pub title: String,
    pub description: String,
    pub icon_name: String,
    pub position: String,
    pub display_order: Rank,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Default for Objective {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            icon_name: NEW_OBJECTIVE_ICON.to_string(),
            position: NEW_OBJECTIVE_POSITION.to_string(),
            display_order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl ContentRow for Objective {
    const TABLE: &'static str = "objectives";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "title": self.title,
            "description": self.description,
            "icon_name": self.icon_name,
            "position": self.position,
        }))
    }
}

impl RankedRow for Objective {
    fn rank(&self) -> Rank {
        self.display_order
    }
}

impl NewItem for Objective {
    fn new_item(position: usize) -> Self {
        Self {
            title: NEW_OBJECTIVE_TITLE.to_string(),
            display_order: rank_of(position),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectivesDraft {
    pub settings: ObjectivesSettings,
    pub objectives: EditableList<Objective>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_objective_template() {
        let o = Objective::new_item(0);
        assert_eq!(o.title, "New Objective");
        assert_eq!(o.icon_name, "leaf-outline");
        assert_eq!(o.position, "left");
    }

    #[test]
    fn test_settings_default_subtitle() {
        let payload = ObjectivesSettings {
            section_subtitle: String::new(),
            ..ObjectivesSettings::default()
        }
        .payload();
        assert_eq!(payload["section_subtitle"], "Our Objectives");
    }
}
