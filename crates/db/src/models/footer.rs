//! Footer copy and footer link columns.

use harva_core::defaults::{NEW_FOOTER_LINK_SECTION, NEW_FOOTER_LINK_TEXT, NEW_LINK_URL};
use harva_core::editable::{rank_of, EditableList, NewItem};
use harva_core::types::{Rank, RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow, RankedRow};
use crate::store::Record;

/// A row from the `footer_content` table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub id: Option<RowId>,
    pub about_text: String,
    pub newsletter_title: String,
    pub copyright_text: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl ContentRow for FooterContent {
    const TABLE: &'static str = "footer_content";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "about_text": self.about_text,
            "newsletter_title": self.newsletter_title,
            "copyright_text": self.copyright_text,
        }))
    }
}

/// A row from the `footer_links` table. `section` names the footer column
/// the link is listed under (`company_info`, `services`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    pub id: Option<RowId>,
    pub section: String,
    pub text: String,
    pub url: String,
    pub display_order: Rank,
    pub created_at: Option<Timestamp>,
}

impl ContentRow for FooterLink {
    const TABLE: &'static str = "footer_links";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "section": self.section,
            "text": self.text,
            "url": self.url,
        }))
    }
}

impl RankedRow for FooterLink {
    fn rank(&self) -> Rank {
        self.display_order
    }
}

impl NewItem for FooterLink {
    fn new_item(position: usize) -> Self {
        Self {
            id: None,
            section: NEW_FOOTER_LINK_SECTION.to_string(),
            text: NEW_FOOTER_LINK_TEXT.to_string(),
            url: NEW_LINK_URL.to_string(),
            display_order: rank_of(position),
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterDraft {
    pub footer: FooterContent,
    pub links: EditableList<FooterLink>,
}
