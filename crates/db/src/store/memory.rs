//! Process-local [`ContentStore`] used by tests and `STORE_BACKEND=memory`.
//!
//! Behaves like the PostgreSQL store for everything the sections rely on:
//! generated ids and timestamps, ascending order with nulls last, unique
//! keys, upsert on conflict, and refusal of unfiltered updates and deletes.
//! Failures can be scheduled per operation and table with
//! [`MemoryStore::fail_on`], which is how partial-save behaviour is tested.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

use super::{id_value, ContentStore, Direction, Filter, Record, Select, StoreError, StoreOp};
use crate::schema::{self, TableSchema};

/// A scheduled failure: the `skip + 1`-th matching call fails.
#[derive(Debug, Clone)]
struct Fault {
    op: StoreOp,
    table: String,
    skip: usize,
}

/// In-memory content store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<&'static str, Vec<Record>>>,
    faults: Mutex<Vec<Fault>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `op` on `table` fail with a backend error.
    pub async fn fail_on(&self, op: StoreOp, table: &str) {
        self.fail_after(op, table, 0).await;
    }

    /// Let `skip` matching calls succeed, then fail the next one.
    pub async fn fail_after(&self, op: StoreOp, table: &str, skip: usize) {
        self.faults.lock().await.push(Fault {
            op,
            table: table.to_string(),
            skip,
        });
    }

    /// Snapshot of a table's rows in storage order.
    pub async fn rows(&self, table: &str) -> Vec<Record> {
        self.tables
            .read()
            .await
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    /// Consume a scheduled fault for this call, if one is due.
    async fn check_fault(&self, op: StoreOp, table: &str) -> Result<(), StoreError> {
        let mut faults = self.faults.lock().await;
        let Some(index) = faults
            .iter()
            .position(|f| f.op == op && f.table == table)
        else {
            return Ok(());
        };

        if faults[index].skip > 0 {
            faults[index].skip -= 1;
            return Ok(());
        }

        faults.remove(index);
        tracing::debug!(%op, table, "Injected store failure");
        Err(StoreError::Backend {
            op,
            table: table.to_string(),
            message: "injected failure".into(),
        })
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn select(&self, query: &Select) -> Result<Vec<Record>, StoreError> {
        let schema = schema::table(&query.table)?;
        check_filters(schema, &query.filters)?;
        if let Some((column, _)) = &query.order {
            schema.check_column(column)?;
        }
        self.check_fault(StoreOp::Select, schema.name).await?;

        let tables = self.tables.read().await;
        let mut rows: Vec<Record> = tables
            .get(schema.name)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches_all(&query.filters, row))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some((column, direction)) = &query.order {
            rows.sort_by(|a, b| {
                let ordering = compare_values(
                    a.get(column).unwrap_or(&Value::Null),
                    b.get(column).unwrap_or(&Value::Null),
                );
                match direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn count(&self, table: &str, filters: &[Filter]) -> Result<i64, StoreError> {
        let schema = schema::table(table)?;
        check_filters(schema, filters)?;
        self.check_fault(StoreOp::Count, schema.name).await?;

        let tables = self.tables.read().await;
        let count = tables
            .get(schema.name)
            .map(|rows| rows.iter().filter(|row| matches_all(filters, row)).count())
            .unwrap_or(0);
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn insert(&self, table: &str, rows: Vec<Record>) -> Result<Vec<Record>, StoreError> {
        let schema = schema::table(table)?;
        for row in &rows {
            schema.check_record(row)?;
        }
        self.check_fault(StoreOp::Insert, schema.name).await?;

        let mut tables = self.tables.write().await;
        let stored = tables.entry(schema.name).or_default();

        // Validate the whole batch before writing so a violation inserts nothing.
        let prepared: Vec<Record> = rows.into_iter().map(|row| stamp_new(schema, row)).collect();
        for (index, row) in prepared.iter().enumerate() {
            check_unique(schema, stored.iter().chain(&prepared[..index]), row)?;
        }

        stored.extend(prepared.iter().cloned());
        Ok(prepared)
    }

    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Record,
    ) -> Result<Vec<Record>, StoreError> {
        let schema = schema::table(table)?;
        require_filters(StoreOp::Update, schema, filters)?;
        check_filters(schema, filters)?;
        schema.check_record(&patch)?;
        self.check_fault(StoreOp::Update, schema.name).await?;

        let mut tables = self.tables.write().await;
        let stored = tables.entry(schema.name).or_default();
        let now = Value::String(Utc::now().to_rfc3339());

        let mut updated = Vec::new();
        for row in stored.iter_mut().filter(|row| matches_all(filters, row)) {
            for (column, value) in &patch {
                row.insert(column.clone(), value.clone());
            }
            if schema.has_updated_at() {
                row.insert("updated_at".into(), now.clone());
            }
            updated.push(row.clone());
        }
        Ok(updated)
    }

    async fn upsert(
        &self,
        table: &str,
        conflict_key: &str,
        rows: Vec<Record>,
    ) -> Result<Vec<Record>, StoreError> {
        let schema = schema::table(table)?;
        schema.check_unique_key(conflict_key)?;
        for row in &rows {
            schema.check_record(row)?;
        }
        self.check_fault(StoreOp::Upsert, schema.name).await?;

        let mut tables = self.tables.write().await;
        let stored = tables.entry(schema.name).or_default();
        let now = Value::String(Utc::now().to_rfc3339());

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let key = row.get(conflict_key).cloned().unwrap_or(Value::Null);
            let existing = stored
                .iter_mut()
                .find(|candidate| !key.is_null() && candidate.get(conflict_key) == Some(&key));

            match existing {
                Some(current) => {
                    for (column, value) in row {
                        if column != "id" {
                            current.insert(column, value);
                        }
                    }
                    if schema.has_updated_at() {
                        current.insert("updated_at".into(), now.clone());
                    }
                    result.push(current.clone());
                }
                None => {
                    let row = stamp_new(schema, row);
                    check_unique(schema, stored.iter(), &row)?;
                    stored.push(row.clone());
                    result.push(row);
                }
            }
        }
        Ok(result)
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError> {
        let schema = schema::table(table)?;
        require_filters(StoreOp::Delete, schema, filters)?;
        check_filters(schema, filters)?;
        self.check_fault(StoreOp::Delete, schema.name).await?;

        let mut tables = self.tables.write().await;
        let stored = tables.entry(schema.name).or_default();
        let before = stored.len();
        stored.retain(|row| !matches_all(filters, row));
        Ok((before - stored.len()) as u64)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn matches_all(filters: &[Filter], row: &Record) -> bool {
    filters.iter().all(|f| f.matches(row))
}

fn check_filters(schema: &TableSchema, filters: &[Filter]) -> Result<(), StoreError> {
    filters
        .iter()
        .try_for_each(|f| schema.check_column(f.column()))
}

fn require_filters(
    op: StoreOp,
    schema: &TableSchema,
    filters: &[Filter],
) -> Result<(), StoreError> {
    if filters.is_empty() {
        Err(StoreError::Unfiltered {
            op,
            table: schema.name.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Fill in the columns the database would generate for a new row.
fn stamp_new(schema: &TableSchema, mut row: Record) -> Record {
    if row.get("id").map_or(true, Value::is_null) {
        row.insert("id".into(), id_value(uuid::Uuid::new_v4()));
    }
    let now = Value::String(Utc::now().to_rfc3339());
    if row.get("created_at").map_or(true, Value::is_null) {
        row.insert("created_at".into(), now.clone());
    }
    if schema.has_updated_at() && row.get("updated_at").map_or(true, Value::is_null) {
        row.insert("updated_at".into(), now);
    }
    row
}

/// Reject `row` if it repeats a unique-key value already present.
fn check_unique<'a>(
    schema: &TableSchema,
    existing: impl Iterator<Item = &'a Record> + Clone,
    row: &Record,
) -> Result<(), StoreError> {
    for column in schema.unique_keys {
        let Some(value) = row.get(*column).filter(|v| !v.is_null()) else {
            continue;
        };
        if existing.clone().any(|other| other.get(*column) == Some(value)) {
            return Err(StoreError::UniqueViolation {
                table: schema.name.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Ascending order for JSON scalars, nulls last (PostgreSQL's default).
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::into_record;
    use assert_matches::assert_matches;
    use harva_core::types::NIL_ROW_ID;
    use serde_json::json;

    fn row(value: Value) -> Record {
        into_record("test", value).unwrap()
    }

    fn stat(number: &str, order: i32) -> Record {
        row(json!({"number": number, "description": "", "display_order": order}))
    }

    #[tokio::test]
    async fn test_insert_generates_id_and_timestamps() {
        let store = MemoryStore::new();
        let inserted = store.insert("statistics", vec![stat("1", 0)]).await.unwrap();
        assert_eq!(inserted.len(), 1);
        assert!(inserted[0]["id"].is_string());
        assert!(inserted[0]["created_at"].is_string());
        assert!(inserted[0]["updated_at"].is_string());
    }

    #[tokio::test]
    async fn test_select_orders_ascending_with_limit() {
        let store = MemoryStore::new();
        store
            .insert("statistics", vec![stat("c", 2), stat("a", 0), stat("b", 1)])
            .await
            .unwrap();

        let rows = store
            .select(&Select::from("statistics").order_by("display_order").limit(2))
            .await
            .unwrap();
        let numbers: Vec<_> = rows.iter().map(|r| r["number"].as_str().unwrap()).collect();
        assert_eq!(numbers, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_select_desc_and_nulls_last() {
        assert_eq!(compare_values(&Value::Null, &json!(1)), Ordering::Greater);
        let store = MemoryStore::new();
        store
            .insert("statistics", vec![stat("a", 0), stat("b", 5)])
            .await
            .unwrap();
        let rows = store
            .select(&Select::from("statistics").order_by_desc("display_order"))
            .await
            .unwrap();
        assert_eq!(rows[0]["number"], "b");
    }

    #[tokio::test]
    async fn test_unknown_column_is_rejected() {
        let store = MemoryStore::new();
        let err = store
            .insert("statistics", vec![row(json!({"hero_id": null}))])
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::UnknownColumn { .. });
    }

    #[tokio::test]
    async fn test_unfiltered_delete_is_refused() {
        let store = MemoryStore::new();
        assert_matches!(
            store.delete("statistics", &[]).await,
            Err(StoreError::Unfiltered { op: StoreOp::Delete, .. })
        );
    }

    #[tokio::test]
    async fn test_sentinel_delete_clears_table() {
        let store = MemoryStore::new();
        store
            .insert("statistics", vec![stat("a", 0), stat("b", 1)])
            .await
            .unwrap();
        let deleted = store
            .delete("statistics", &[Filter::neq("id", id_value(NIL_ROW_ID))])
            .await
            .unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(store.count("statistics", &[]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_touches_matching_rows_only() {
        let store = MemoryStore::new();
        store
            .insert("statistics", vec![stat("a", 0), stat("b", 1)])
            .await
            .unwrap();
        let updated = store
            .update(
                "statistics",
                &[Filter::eq("number", "a")],
                row(json!({"description": "changed"})),
            )
            .await
            .unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(
            store
                .count("statistics", &[Filter::eq("description", "changed")])
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_upsert_updates_on_conflict_key() {
        let store = MemoryStore::new();
        let cta = |title: &str| {
            row(json!({"page_name": "contact", "title": title, "description": "d"}))
        };
        let first = store
            .upsert("page_cta_sections", "page_name", vec![cta("one")])
            .await
            .unwrap();
        let second = store
            .upsert("page_cta_sections", "page_name", vec![cta("two")])
            .await
            .unwrap();
        assert_eq!(first[0]["id"], second[0]["id"]);
        assert_eq!(second[0]["title"], "two");
        assert_eq!(store.count("page_cta_sections", &[]).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_upsert_requires_unique_key() {
        let store = MemoryStore::new();
        let err = store
            .upsert("page_cta_sections", "title", vec![])
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::NotUnique { .. });
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_unique_value() {
        let store = MemoryStore::new();
        let user = row(json!({"email": "a@b.c", "password_hash": "x", "role": "admin"}));
        store.insert("cms_users", vec![user.clone()]).await.unwrap();
        assert_matches!(
            store.insert("cms_users", vec![user]).await,
            Err(StoreError::UniqueViolation { .. })
        );
        assert_eq!(store.rows("cms_users").await.len(), 1);
    }

    #[tokio::test]
    async fn test_fault_fires_once_after_skips() {
        let store = MemoryStore::new();
        store.fail_after(StoreOp::Insert, "statistics", 1).await;

        assert!(store.insert("statistics", vec![stat("a", 0)]).await.is_ok());
        assert_matches!(
            store.insert("statistics", vec![stat("b", 1)]).await,
            Err(StoreError::Backend { op: StoreOp::Insert, .. })
        );
        assert!(store.insert("statistics", vec![stat("c", 2)]).await.is_ok());
        assert_eq!(store.rows("statistics").await.len(), 2);
    }

    #[tokio::test]
    async fn test_fault_is_scoped_to_table() {
        let store = MemoryStore::new();
        store.fail_on(StoreOp::Count, "objectives").await;
        assert!(store.count("statistics", &[]).await.is_ok());
        assert!(store.count("objectives", &[]).await.is_err());
    }
}
