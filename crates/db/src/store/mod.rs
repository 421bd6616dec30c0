//! The backend data API.
//!
//! [`ContentStore`] is the table-level surface every section is written
//! against: filtered select with ordering and limit, insert, update, upsert,
//! delete and row counts. Rows travel as JSON objects ([`Record`]) and are
//! converted to typed models at the edges with [`decode_rows`] /
//! [`encode_row`].
//!
//! Two implementations exist:
//! - [`postgres::PgStore`] -- production storage over a sqlx pool.
//! - [`memory::MemoryStore`] -- process-local storage with fault injection.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use harva_core::types::RowId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// One row as a JSON object keyed by column name.
pub type Record = serde_json::Map<String, Value>;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown column '{column}' on table {table}")]
    UnknownColumn { table: String, column: String },

    #[error("Column '{column}' on table {table} is not a unique key")]
    NotUnique { table: String, column: String },

    #[error("Refusing to {op} every row of {table} without a filter")]
    Unfiltered { op: StoreOp, table: String },

    #[error("Duplicate value for unique column '{column}' on table {table}")]
    UniqueViolation { table: String, column: String },

    #[error("Malformed row from {table}: {reason}")]
    MalformedRow { table: String, reason: String },

    #[error("Row encoding error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure reported by the backend itself (network, permissions, ...).
    #[error("Backend error during {op} on {table}: {message}")]
    Backend {
        op: StoreOp,
        table: String,
        message: String,
    },
}

/// The kind of operation a store call performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Select,
    Count,
    Insert,
    Update,
    Upsert,
    Delete,
}

impl std::fmt::Display for StoreOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StoreOp::Select => "select",
            StoreOp::Count => "count",
            StoreOp::Insert => "insert",
            StoreOp::Update => "update",
            StoreOp::Upsert => "upsert",
            StoreOp::Delete => "delete",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Query building blocks
// ---------------------------------------------------------------------------

/// A row filter. All filters of a call are AND-ed.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(String, Value),
    Neq(String, Value),
}

impl Filter {
    pub fn eq(column: &str, value: impl Into<Value>) -> Self {
        Filter::Eq(column.to_string(), value.into())
    }

    pub fn neq(column: &str, value: impl Into<Value>) -> Self {
        Filter::Neq(column.to_string(), value.into())
    }

    /// `column = id` for a UUID-valued column.
    pub fn eq_id(column: &str, id: RowId) -> Self {
        Filter::Eq(column.to_string(), id_value(id))
    }

    /// `id = id`.
    pub fn id(id: RowId) -> Self {
        Self::eq_id("id", id)
    }

    pub fn column(&self) -> &str {
        match self {
            Filter::Eq(column, _) | Filter::Neq(column, _) => column,
        }
    }

    /// Evaluate the filter against an in-memory row. A missing column reads
    /// as null.
    pub fn matches(&self, record: &Record) -> bool {
        let actual = record.get(self.column()).unwrap_or(&Value::Null);
        match self {
            Filter::Eq(_, expected) => actual == expected,
            Filter::Neq(_, expected) => actual != expected,
        }
    }
}

/// Sort direction for [`Select::order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A select request: table, filters, ordering and limit.
#[derive(Debug, Clone)]
pub struct Select {
    pub table: String,
    pub filters: Vec<Filter>,
    pub order: Option<(String, Direction)>,
    pub limit: Option<usize>,
}

impl Select {
    pub fn from(table: &str) -> Self {
        Self {
            table: table.to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_by(mut self, column: &str) -> Self {
        self.order = Some((column.to_string(), Direction::Asc));
        self
    }

    pub fn order_by_desc(mut self, column: &str) -> Self {
        self.order = Some((column.to_string(), Direction::Desc));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ---------------------------------------------------------------------------
// The store trait
// ---------------------------------------------------------------------------

/// Table-level data API backing every content section.
///
/// Writes return the affected rows as stored (generated ids and timestamps
/// included). Update and delete refuse to run without at least one filter;
/// clearing a table is spelled `Filter::neq("id", NIL_ROW_ID)`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch rows matching the request.
    async fn select(&self, query: &Select) -> Result<Vec<Record>, StoreError>;

    /// Count rows matching all filters.
    async fn count(&self, table: &str, filters: &[Filter]) -> Result<i64, StoreError>;

    /// Insert rows, returning them as stored.
    async fn insert(&self, table: &str, rows: Vec<Record>) -> Result<Vec<Record>, StoreError>;

    /// Apply `patch` to every row matching all filters.
    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Record,
    ) -> Result<Vec<Record>, StoreError>;

    /// Insert rows, or update the existing row sharing the `conflict_key`
    /// value.
    async fn upsert(
        &self,
        table: &str,
        conflict_key: &str,
        rows: Vec<Record>,
    ) -> Result<Vec<Record>, StoreError>;

    /// Delete every row matching all filters, returning how many went.
    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError>;
}

// ---------------------------------------------------------------------------
// Typed helpers
// ---------------------------------------------------------------------------

/// JSON representation of a row id.
pub fn id_value(id: RowId) -> Value {
    Value::String(id.to_string())
}

/// Read the `id` column of a stored row.
pub fn record_id(table: &str, record: &Record) -> Result<RowId, StoreError> {
    let raw = record
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::MalformedRow {
            table: table.to_string(),
            reason: "missing id".into(),
        })?;
    raw.parse().map_err(|_| StoreError::MalformedRow {
        table: table.to_string(),
        reason: format!("id '{raw}' is not a UUID"),
    })
}

/// Unwrap a JSON value that must be an object.
pub fn into_record(table: &str, value: Value) -> Result<Record, StoreError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::MalformedRow {
            table: table.to_string(),
            reason: format!("expected a JSON object, got {other}"),
        }),
    }
}

/// Serialize a model into a row.
pub fn encode_row<T: Serialize>(table: &str, row: &T) -> Result<Record, StoreError> {
    into_record(table, serde_json::to_value(row)?)
}

/// Deserialize stored rows into models.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Record>) -> Result<Vec<T>, StoreError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(Value::Object(row)).map_err(StoreError::from))
        .collect()
}

/// Run a select and decode every row.
pub async fn fetch_all<T: DeserializeOwned>(
    store: &dyn ContentStore,
    query: &Select,
) -> Result<Vec<T>, StoreError> {
    decode_rows(store.select(query).await?)
}

/// Run a select limited to one row and decode it, if any.
pub async fn fetch_optional<T: DeserializeOwned>(
    store: &dyn ContentStore,
    query: Select,
) -> Result<Option<T>, StoreError> {
    let rows = store.select(&query.limit(1)).await?;
    Ok(decode_rows(rows)?.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn row(value: Value) -> Record {
        into_record("t", value).unwrap()
    }

    #[test]
    fn test_eq_filter_matches() {
        let r = row(json!({"page_name": "contact"}));
        assert!(Filter::eq("page_name", "contact").matches(&r));
        assert!(!Filter::eq("page_name", "services_top").matches(&r));
    }

    #[test]
    fn test_neq_filter_treats_missing_as_null() {
        let r = row(json!({"title": "x"}));
        assert!(Filter::neq("id", id_value(RowId::nil())).matches(&r));
        assert!(!Filter::eq("id", id_value(RowId::nil())).matches(&r));
        assert!(Filter::eq("id", Value::Null).matches(&r));
    }

    #[test]
    fn test_record_id_parses_uuid() {
        let id = RowId::new_v4();
        let r = row(json!({"id": id.to_string()}));
        assert_eq!(record_id("t", &r).unwrap(), id);
    }

    #[test]
    fn test_record_id_rejects_garbage() {
        assert_matches!(
            record_id("t", &row(json!({"id": "nope"}))),
            Err(StoreError::MalformedRow { .. })
        );
        assert_matches!(
            record_id("t", &row(json!({}))),
            Err(StoreError::MalformedRow { .. })
        );
    }

    #[test]
    fn test_into_record_rejects_non_objects() {
        assert_matches!(into_record("t", json!([1])), Err(StoreError::MalformedRow { .. }));
    }

    #[test]
    fn test_select_builder() {
        let q = Select::from("statistics")
            .filter(Filter::eq("number", "65"))
            .order_by("display_order")
            .limit(5);
        assert_eq!(q.table, "statistics");
        assert_eq!(q.filters.len(), 1);
        assert_eq!(q.order, Some(("display_order".to_string(), Direction::Asc)));
        assert_eq!(q.limit, Some(5));
    }
}
