//! Service catalogue: categories, each owning an ordered list of items.

use harva_core::defaults::{
    non_empty, or_default, DEFAULT_AUTHOR, NEW_SERVICE_CATEGORY_SUBTITLE,
    NEW_SERVICE_CATEGORY_TITLE, NEW_SERVICE_ITEM_TITLE, SERVICES_PAGE,
};
use harva_core::editable::{rank_of, EditableList, NewItem};
use harva_core::types::{Rank, RowId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{object, row_identity, ContentRow, RankedRow};
use crate::store::Record;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// A row from the `service_categories` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCategory {
    pub id: Option<RowId>,
    pub title: String,
    pub subtitle: String,
    pub page: String,
    pub display_order: Rank,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Default for ServiceCategory {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            subtitle: String::new(),
            page: SERVICES_PAGE.to_string(),
            display_order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl ContentRow for ServiceCategory {
    const TABLE: &'static str = "service_categories";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "title": self.title,
            "subtitle": self.subtitle,
            "page": or_default(&self.page, SERVICES_PAGE),
        }))
    }
}

impl RankedRow for ServiceCategory {
    fn rank(&self) -> Rank {
        self.display_order
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// A row from the `service_items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    pub id: Option<RowId>,
    pub category_id: Option<RowId>,
    pub title: String,
    pub image_url: Option<String>,
    pub author: String,
    pub display_order: Rank,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Default for ServiceItem {
    fn default() -> Self {
        Self {
            id: None,
            category_id: None,
            title: String::new(),
            image_url: None,
            author: DEFAULT_AUTHOR.to_string(),
            display_order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl ContentRow for ServiceItem {
    const TABLE: &'static str = "service_items";

    row_identity!();

    fn payload(&self) -> Record {
        object(json!({
            "title": self.title,
            "image_url": non_empty(self.image_url.as_deref()),
            "author": or_default(&self.author, DEFAULT_AUTHOR),
        }))
    }
}

impl RankedRow for ServiceItem {
    fn rank(&self) -> Rank {
        self.display_order
    }
}

impl NewItem for ServiceItem {
    fn new_item(position: usize) -> Self {
        Self {
            title: NEW_SERVICE_ITEM_TITLE.to_string(),
            display_order: rank_of(position),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// A category together with its items, as edited.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCategoryDraft {
    #[serde(flatten)]
    pub category: ServiceCategory,
    pub items: EditableList<ServiceItem>,
}

impl NewItem for ServiceCategoryDraft {
    fn new_item(position: usize) -> Self {
        Self {
            category: ServiceCategory {
                title: NEW_SERVICE_CATEGORY_TITLE.to_string(),
                subtitle: NEW_SERVICE_CATEGORY_SUBTITLE.to_string(),
                display_order: rank_of(position),
                ..ServiceCategory::default()
            },
            items: EditableList::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesDraft {
    pub categories: EditableList<ServiceCategoryDraft>,
}

/// Group items under their categories, keeping each side's order. Items
/// whose category is not in `categories` are dropped.
pub fn group_items(
    categories: Vec<ServiceCategory>,
    items: Vec<ServiceItem>,
) -> EditableList<ServiceCategoryDraft> {
    categories
        .into_iter()
        .map(|category| {
            let items = items
                .iter()
                .filter(|item| item.category_id.is_some() && item.category_id == category.id)
                .cloned()
                .collect();
            ServiceCategoryDraft { category, items }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_draft_flattens_category_fields() {
        let draft: ServiceCategoryDraft = serde_json::from_value(json!({
            "title": "Therapies",
            "items": [{"title": "Red light"}]
        }))
        .unwrap();
        assert_eq!(draft.category.title, "Therapies");
        assert_eq!(draft.category.page, "services");
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items.get(0).unwrap().author, "Harva Team");

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["title"], "Therapies");
        assert!(value["items"].is_array());
    }

    #[test]
    fn test_group_items_by_category() {
        let a = RowId::new_v4();
        let b = RowId::new_v4();
        let categories = vec![
            ServiceCategory {
                id: Some(a),
                ..ServiceCategory::default()
            },
            ServiceCategory {
                id: Some(b),
                ..ServiceCategory::default()
            },
        ];
        let item = |cat: Option<RowId>, title: &str| ServiceItem {
            category_id: cat,
            title: title.into(),
            ..ServiceItem::default()
        };
        let items = vec![
            item(Some(b), "b0"),
            item(Some(a), "a0"),
            item(None, "orphan"),
            item(Some(a), "a1"),
        ];

        let grouped = group_items(categories, items);
        let titles: Vec<Vec<&str>> = grouped
            .iter()
            .map(|c| c.items.iter().map(|i| i.title.as_str()).collect())
            .collect();
        assert_eq!(titles, vec![vec!["a0", "a1"], vec!["b0"]]);
    }

    #[test]
    fn test_new_category_template() {
        let c = ServiceCategoryDraft::new_item(1);
        assert_eq!(c.category.title, "New Service Category");
        assert_eq!(c.category.page, "services");
        assert_eq!(c.category.display_order, 1);
    }
}
