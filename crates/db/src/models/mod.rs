//! Row models and section drafts.
//!
//! Each table has one struct that serves both as the stored row and as the
//! editable draft entry: `id` and timestamps are `None` until the row has
//! been written. Every struct deserializes with `#[serde(default)]`, so a
//! partial draft body fills the rest from the section defaults.
//!
//! A row's [`ContentRow::payload`] is what a save writes: the editable
//! columns with defaults substituted, never `id`, rank, parent reference or
//! timestamps (those are owned by the reconciliation routines and the
//! store).

pub mod about;
pub mod contact;
pub mod cta;
pub mod dashboard;
pub mod footer;
pub mod hero;
pub mod objectives;
pub mod page_cta;
pub mod photobio;
pub mod services;
pub mod site_settings;
pub mod statistics;
pub mod user;

use harva_core::types::{Rank, RowId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::store::Record;

/// A typed row of one content table.
pub trait ContentRow: Serialize + DeserializeOwned + Send + Sync {
    /// Backend table the row lives in.
    const TABLE: &'static str;

    /// Backend id, `None` for a row not yet written.
    fn id(&self) -> Option<RowId>;

    /// Record the id assigned by the store.
    fn set_id(&mut self, id: RowId);

    /// Editable columns as written on save.
    fn payload(&self) -> Record;
}

/// A row of an ordered collection.
pub trait RankedRow: ContentRow {
    const RANK_COLUMN: &'static str = "display_order";

    fn rank(&self) -> Rank;
}

/// A row addressed by a unique natural key rather than by id.
pub trait KeyedRow: ContentRow {
    const KEY_COLUMN: &'static str;

    fn key(&self) -> &str;
}

/// Unwrap a `json!` object literal into a [`Record`].
pub(crate) fn object(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => Record::new(),
    }
}

/// Implement [`ContentRow::id`] / [`ContentRow::set_id`] for a struct with an
/// `id: Option<RowId>` field.
macro_rules! row_identity {
    () => {
        fn id(&self) -> Option<harva_core::types::RowId> {
            self.id
        }

        fn set_id(&mut self, id: harva_core::types::RowId) {
            self.id = Some(id);
        }
    };
}

pub(crate) use row_identity;
