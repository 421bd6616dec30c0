//! Contact details and social links.

use harva_core::defaults::{NEW_LINK_URL, NEW_SOCIAL_ICON, NEW_SOCIAL_PLATFORM};
use harva_core::editable::{rank_of, EditableList, NewItem};
use harva_core::types::{Rank, RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow, RankedRow};
use crate::store::Record;

/// A row from the `contact_details` table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub id: Option<RowId>,
    pub hotline: String,
    pub email: String,
    pub address: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl ContentRow for ContactDetails {
    const TABLE: &'static str = "contact_details";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "hotline": self.hotline,
            "email": self.email,
            "address": self.address,
        }))
    }
}

/// A row from the `social_links` table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub id: Option<RowId>,
    pub platform: String,
    pub url: String,
    pub icon_name: String,
    pub display_order: Rank,
    pub created_at: Option<Timestamp>,
}

impl ContentRow for SocialLink {
    const TABLE: &'static str = "social_links";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "platform": self.platform,
            "url": self.url,
            "icon_name": self.icon_name,
        }))
    }
}

impl RankedRow for SocialLink {
    fn rank(&self) -> Rank {
        self.display_order
    }
}

impl NewItem for SocialLink {
    fn new_item(position: usize) -> Self {
        Self {
            id: None,
            platform: NEW_SOCIAL_PLATFORM.to_string(),
            url: NEW_LINK_URL.to_string(),
            icon_name: NEW_SOCIAL_ICON.to_string(),
            display_order: rank_of(position),
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub contact: ContactDetails,
    pub social_links: EditableList<SocialLink>,
}
