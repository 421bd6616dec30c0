//! Registry of the tables the content store may touch.
//!
//! Every table and column name that reaches SQL is checked against this list
//! first, so dynamic queries never interpolate caller-supplied identifiers.
//! It must stay in step with `db/migrations`.

use crate::store::{Record, StoreError};

/// Shape of one backend table.
#[derive(Debug)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    /// Columns carrying a unique constraint (valid upsert conflict targets).
    pub unique_keys: &'static [&'static str],
}

impl TableSchema {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }

    pub fn has_updated_at(&self) -> bool {
        self.has_column("updated_at")
    }

    /// Reject a column name that is not part of this table.
    pub fn check_column(&self, column: &str) -> Result<(), StoreError> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(StoreError::UnknownColumn {
                table: self.name.to_string(),
                column: column.to_string(),
            })
        }
    }

    /// Reject a record carrying any column not part of this table.
    pub fn check_record(&self, record: &Record) -> Result<(), StoreError> {
        record.keys().try_for_each(|column| self.check_column(column))
    }

    /// Reject a conflict target that is not a unique key.
    pub fn check_unique_key(&self, column: &str) -> Result<(), StoreError> {
        self.check_column(column)?;
        if self.unique_keys.contains(&column) {
            Ok(())
        } else {
            Err(StoreError::NotUnique {
                table: self.name.to_string(),
                column: column.to_string(),
            })
        }
    }
}

/// Every table the service reads or writes.
pub const TABLES: &[TableSchema] = &[
    TableSchema {
        name: "hero_section",
        columns: &[
            "id", "title", "subtitle", "cta_text", "cta_url", "hero_image_url", "created_at",
            "updated_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "hero_cards",
        columns: &[
            "id", "hero_id", "icon_name", "subtitle", "title", "display_order", "created_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "about_section",
        columns: &[
            "id",
            "section_subtitle",
            "section_title",
            "main_paragraph",
            "mission_title",
            "mission_text",
            "mission_icon",
            "vision_title",
            "vision_text",
            "vision_icon",
            "image_1_url",
            "image_2_url",
            "created_at",
            "updated_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "about_list_items",
        columns: &["id", "about_id", "text", "display_order", "created_at"],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "cta_section",
        columns: &["id", "title", "description", "image_url", "created_at", "updated_at"],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "contact_details",
        columns: &["id", "hotline", "email", "address", "created_at", "updated_at"],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "social_links",
        columns: &["id", "platform", "url", "icon_name", "display_order", "created_at"],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "footer_content",
        columns: &[
            "id", "about_text", "newsletter_title", "copyright_text", "created_at", "updated_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "footer_links",
        columns: &["id", "section", "text", "url", "display_order", "created_at"],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "objectives",
        columns: &[
            "id", "title", "description", "icon_name", "position", "display_order", "created_at",
            "updated_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "objectives_section_settings",
        columns: &[
            "id", "section_subtitle", "section_title", "banner_image_url", "created_at",
            "updated_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "page_cta_sections",
        columns: &[
            "id", "page_name", "title", "description", "image_url", "button_text", "button_url",
            "created_at", "updated_at",
        ],
        unique_keys: &["id", "page_name"],
    },
    TableSchema {
        name: "photobio_section_settings",
        columns: &[
            "id", "section_subtitle", "section_title", "cta_text", "created_at", "updated_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "photobiomodulation_cards",
        columns: &[
            "id", "title", "description", "image_url", "author", "comments_count",
            "display_order", "created_at", "updated_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "service_categories",
        columns: &[
            "id", "title", "subtitle", "page", "display_order", "created_at", "updated_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "service_items",
        columns: &[
            "id", "category_id", "title", "image_url", "author", "display_order", "created_at",
            "updated_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "site_settings",
        columns: &[
            "id", "site_title", "site_description", "logo_url", "favicon_url", "created_at",
            "updated_at",
        ],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "statistics",
        columns: &["id", "number", "description", "display_order", "created_at", "updated_at"],
        unique_keys: &["id"],
    },
    TableSchema {
        name: "cms_users",
        columns: &[
            "id", "email", "full_name", "password_hash", "role", "created_at", "updated_at",
        ],
        unique_keys: &["id", "email"],
    },
];

/// Look up a table by name.
pub fn table(name: &str) -> Result<&'static TableSchema, StoreError> {
    TABLES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| StoreError::UnknownTable(name.to_string()))
}
