//! Generic reconciliation between a local draft and the store.
//!
//! Every section is a composition of the routines here, parameterised by the
//! row type (table, rank column) and a [`Scope`] (the whole table, or the
//! rows owned by one parent):
//!
//! - [`load_singleton`] / [`load_collection`] -- the fetch phase.
//! - [`save_singleton`] -- update by id, else insert and capture the new id.
//! - [`replace_collection`] -- delete the scope, then insert the local list
//!   with dense ranks.
//! - [`sync_in_place`] -- update-or-insert each row by id, then delete the
//!   stored rows missing from the list.
//! - [`upsert_by_key`] -- one upsert per keyed row; nothing is deleted.
//!
//! Store calls inside a save are awaited one after the other and nothing is
//! rolled back: a failure leaves whatever the earlier calls produced.

use std::collections::HashSet;

use harva_core::editable::EditableList;
use harva_core::types::{RowId, NIL_ROW_ID};
use serde_json::Value;

use crate::models::{ContentRow, KeyedRow, RankedRow};
use crate::store::{
    fetch_all, fetch_optional, id_value, record_id, ContentStore, Filter, Record, Select,
    StoreError,
};

/// Which rows of a collection table belong to the section being saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every row of the table.
    All,
    /// Rows whose `column` references the parent `id`.
    Parent { column: &'static str, id: RowId },
}

impl Scope {
    pub fn parent(column: &'static str, id: RowId) -> Self {
        Scope::Parent { column, id }
    }

    /// Filter selecting the scope. The whole table is addressed through the
    /// nil-id sentinel since the store refuses unfiltered deletes.
    pub fn filter(&self) -> Filter {
        match self {
            Scope::All => Filter::neq("id", id_value(NIL_ROW_ID)),
            Scope::Parent { column, id } => Filter::eq_id(column, *id),
        }
    }

    /// Point a record at the scope's parent, if any.
    fn stamp(&self, record: &mut Record) {
        if let Scope::Parent { column, id } = self {
            record.insert((*column).to_string(), id_value(*id));
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Read a section's singleton row. `None` when the section has never been
/// saved; if several rows exist the oldest wins.
pub async fn load_singleton<T: ContentRow>(
    store: &dyn ContentStore,
) -> Result<Option<T>, StoreError> {
    fetch_optional(store, Select::from(T::TABLE).order_by("created_at")).await
}

/// Read the rows of a collection scope, sorted by rank.
pub async fn load_collection<T: RankedRow>(
    store: &dyn ContentStore,
    scope: &Scope,
) -> Result<Vec<T>, StoreError> {
    let query = Select::from(T::TABLE)
        .filter(scope.filter())
        .order_by(T::RANK_COLUMN);
    fetch_all(store, &query).await
}

// ---------------------------------------------------------------------------
// Save
// ---------------------------------------------------------------------------

/// Write a singleton: update by id when the row has one, insert otherwise.
///
/// An update that matches nothing (the row was deleted under us) falls
/// through to an insert. The id of the written row is stored back into
/// `row` and returned.
pub async fn save_singleton<T: ContentRow>(
    store: &dyn ContentStore,
    row: &mut T,
) -> Result<RowId, StoreError> {
    let payload = row.payload();

    if let Some(id) = row.id() {
        let updated = store.update(T::TABLE, &[Filter::id(id)], payload.clone()).await?;
        if !updated.is_empty() {
            tracing::debug!(table = T::TABLE, %id, "Updated singleton");
            return Ok(id);
        }
        tracing::warn!(table = T::TABLE, %id, "Singleton row missing on update, inserting");
    }

    let id = insert_one(store, T::TABLE, payload).await?;
    row.set_id(id);
    tracing::debug!(table = T::TABLE, %id, "Inserted singleton");
    Ok(id)
}

/// Replace every row of `scope` with `items`.
///
/// Deletes the scope, then inserts the list with `rank = index` and the
/// parent reference from `scope`. If the insert fails the scope stays empty
/// until the next successful save.
pub async fn replace_collection<T: RankedRow>(
    store: &dyn ContentStore,
    scope: &Scope,
    items: &EditableList<T>,
) -> Result<Vec<Record>, StoreError> {
    let removed = store.delete(T::TABLE, &[scope.filter()]).await?;
    tracing::debug!(table = T::TABLE, removed, "Cleared collection");

    let rows = ranked_payloads(scope, items);
    let count = rows.len();
    match store.insert(T::TABLE, rows).await {
        Ok(inserted) => {
            tracing::debug!(table = T::TABLE, inserted = count, "Reinserted collection");
            Ok(inserted)
        }
        Err(e) => {
            tracing::warn!(
                table = T::TABLE,
                removed,
                error = %e,
                "Insert failed after delete; collection left empty",
            );
            Err(e)
        }
    }
}

/// Reconcile `items` with the stored rows of `scope` row by row.
///
/// Rows with an id are updated in place (rank and parent included); rows
/// without one, or whose update matched nothing, are inserted and receive
/// their new id. An id repeated later in the list only updates its first
/// occurrence; the repeat is inserted as a new row. Stored rows of the scope
/// that are no longer in the list are then deleted one at a time.
pub async fn sync_in_place<T: RankedRow>(
    store: &dyn ContentStore,
    scope: &Scope,
    items: &mut EditableList<T>,
) -> Result<(), StoreError> {
    let mut kept = HashSet::with_capacity(items.len());

    for (index, item) in items.iter_mut().enumerate() {
        let mut record = item.payload();
        record.insert(T::RANK_COLUMN.to_string(), Value::from(index));
        scope.stamp(&mut record);

        if let Some(id) = item.id().filter(|id| !kept.contains(id)) {
            let updated = store.update(T::TABLE, &[Filter::id(id)], record.clone()).await?;
            if !updated.is_empty() {
                kept.insert(id);
                continue;
            }
        }

        let id = insert_one(store, T::TABLE, record).await?;
        item.set_id(id);
        kept.insert(id);
    }

    let stored = store
        .select(&Select::from(T::TABLE).filter(scope.filter()))
        .await?;
    let mut removed = 0usize;
    for row in &stored {
        let id = record_id(T::TABLE, row)?;
        if !kept.contains(&id) {
            store.delete(T::TABLE, &[Filter::id(id)]).await?;
            removed += 1;
        }
    }

    tracing::debug!(table = T::TABLE, kept = kept.len(), removed, "Synced collection in place");
    Ok(())
}

/// Upsert each row on its natural key, sequentially.
pub async fn upsert_by_key<T: KeyedRow>(
    store: &dyn ContentStore,
    rows: &[T],
) -> Result<Vec<Record>, StoreError> {
    let mut written = Vec::with_capacity(rows.len());
    for row in rows {
        let stored = store
            .upsert(T::TABLE, T::KEY_COLUMN, vec![row.payload()])
            .await?;
        tracing::debug!(table = T::TABLE, key = row.key(), "Upserted keyed row");
        written.extend(stored);
    }
    Ok(written)
}

/// Delete one row by id. Returns whether a row was removed.
pub async fn delete_by_id<T: ContentRow>(
    store: &dyn ContentStore,
    id: RowId,
) -> Result<bool, StoreError> {
    let removed = store.delete(T::TABLE, &[Filter::id(id)]).await?;
    Ok(removed > 0)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Payloads for a collection, ranked by position and stamped with the scope.
pub fn ranked_payloads<T: RankedRow>(scope: &Scope, items: &EditableList<T>) -> Vec<Record> {
    items
        .ranked()
        .map(|(rank, item)| {
            let mut record = item.payload();
            record.insert(T::RANK_COLUMN.to_string(), Value::from(rank));
            scope.stamp(&mut record);
            record
        })
        .collect()
}

/// Insert a single record and return its generated id.
pub async fn insert_one(
    store: &dyn ContentStore,
    table: &str,
    record: Record,
) -> Result<RowId, StoreError> {
    let inserted = store.insert(table, vec![record]).await?;
    let row = inserted.first().ok_or_else(|| StoreError::MalformedRow {
        table: table.to_string(),
        reason: "insert returned no row".into(),
    })?;
    record_id(table, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statistics::Statistic;

    #[test]
    fn test_scope_all_uses_nil_sentinel() {
        assert_eq!(
            Scope::All.filter(),
            Filter::neq("id", "00000000-0000-0000-0000-000000000000")
        );
    }

    #[test]
    fn test_ranked_payloads_are_dense_and_scoped() {
        let parent = RowId::new_v4();
        let items: EditableList<Statistic> = vec![
            Statistic {
                display_order: 7,
                ..Statistic::new("65", "A")
            },
            Statistic {
                display_order: 7,
                ..Statistic::new("10", "B")
            },
        ]
        .into();

        let rows = ranked_payloads(&Scope::parent("hero_id", parent), &items);
        assert_eq!(rows[0]["display_order"], 0);
        assert_eq!(rows[1]["display_order"], 1);
        assert_eq!(rows[1]["hero_id"], parent.to_string());

        let rows = ranked_payloads(&Scope::All, &items);
        assert!(!rows[0].contains_key("hero_id"));
    }
}
