//! PostgreSQL-backed [`ContentStore`].
//!
//! Rows cross the boundary as `jsonb`: reads use `to_jsonb(t)`, writes feed
//! the JSON payload through `jsonb_populate_record(set)` so PostgreSQL casts
//! each value to its column type. Identifiers are checked against
//! [`crate::schema`] and then quoted; values are always bound.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::{into_record, ContentStore, Direction, Filter, Record, Select, StoreError, StoreOp};
use crate::schema::{self, TableSchema};

/// Content store over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_records(
        &self,
        table: &str,
        sql: &str,
        binds: Vec<Value>,
    ) -> Result<Vec<Record>, StoreError> {
        let mut query = sqlx::query_scalar::<_, Value>(sql);
        for value in binds {
            query = query.bind(value);
        }
        query
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|value| into_record(table, value))
            .collect()
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn select(&self, query: &Select) -> Result<Vec<Record>, StoreError> {
        let schema = schema::table(&query.table)?;
        let (where_sql, binds) = where_clause(schema, &query.filters, 1)?;

        let mut sql = format!(
            "SELECT to_jsonb(t) FROM {} AS t{where_sql}",
            quote(schema.name)
        );
        if let Some((column, direction)) = &query.order {
            schema.check_column(column)?;
            let dir = match direction {
                Direction::Asc => "ASC",
                Direction::Desc => "DESC",
            };
            sql.push_str(&format!(" ORDER BY t.{} {dir}", quote(column)));
        }
        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        self.fetch_records(schema.name, &sql, binds).await
    }

    async fn count(&self, table: &str, filters: &[Filter]) -> Result<i64, StoreError> {
        let schema = schema::table(table)?;
        let (where_sql, binds) = where_clause(schema, filters, 1)?;
        let sql = format!("SELECT COUNT(*) FROM {} AS t{where_sql}", quote(schema.name));

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for value in binds {
            query = query.bind(value);
        }
        Ok(query.fetch_one(&self.pool).await?)
    }

    async fn insert(&self, table: &str, rows: Vec<Record>) -> Result<Vec<Record>, StoreError> {
        let schema = schema::table(table)?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let columns = payload_columns(schema, &rows)?;

        let sql = format!(
            "INSERT INTO {table} AS t ({cols}) \
             SELECT {picked} FROM jsonb_populate_recordset(NULL::{table}, $1) AS p \
             RETURNING to_jsonb(t)",
            table = quote(schema.name),
            cols = column_list(&columns, ""),
            picked = column_list(&columns, "p."),
        );
        let payload = Value::Array(rows.into_iter().map(Value::Object).collect());

        self.fetch_records(schema.name, &sql, vec![payload]).await
    }

    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Record,
    ) -> Result<Vec<Record>, StoreError> {
        let schema = schema::table(table)?;
        if filters.is_empty() {
            return Err(StoreError::Unfiltered {
                op: StoreOp::Update,
                table: schema.name.to_string(),
            });
        }
        if patch.is_empty() {
            let query = Select {
                table: schema.name.to_string(),
                filters: filters.to_vec(),
                order: None,
                limit: None,
            };
            return self.select(&query).await;
        }

        let columns = payload_columns(schema, std::slice::from_ref(&patch))?;
        let (where_sql, mut binds) = where_clause(schema, filters, 2)?;

        let sql = format!(
            "UPDATE {table} AS t SET ({cols}) = \
                 (SELECT {picked} FROM jsonb_populate_record(NULL::{table}, $1) AS p)\
             {where_sql} \
             RETURNING to_jsonb(t)",
            table = quote(schema.name),
            cols = column_list(&columns, ""),
            picked = column_list(&columns, "p."),
        );
        binds.insert(0, Value::Object(patch));

        self.fetch_records(schema.name, &sql, binds).await
    }

    async fn upsert(
        &self,
        table: &str,
        conflict_key: &str,
        rows: Vec<Record>,
    ) -> Result<Vec<Record>, StoreError> {
        let schema = schema::table(table)?;
        schema.check_unique_key(conflict_key)?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let columns = payload_columns(schema, &rows)?;

        let assignments: Vec<String> = columns
            .iter()
            .filter(|c| c.as_str() != conflict_key && c.as_str() != "id")
            .map(|c| format!("{col} = EXCLUDED.{col}", col = quote(c)))
            .collect();
        let on_conflict = if assignments.is_empty() {
            "DO NOTHING".to_string()
        } else {
            format!("DO UPDATE SET {}", assignments.join(", "))
        };

        let sql = format!(
            "INSERT INTO {table} AS t ({cols}) \
             SELECT {picked} FROM jsonb_populate_recordset(NULL::{table}, $1) AS p \
             ON CONFLICT ({key}) {on_conflict} \
             RETURNING to_jsonb(t)",
            table = quote(schema.name),
            cols = column_list(&columns, ""),
            picked = column_list(&columns, "p."),
            key = quote(conflict_key),
        );
        let payload = Value::Array(rows.into_iter().map(Value::Object).collect());

        self.fetch_records(schema.name, &sql, vec![payload]).await
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError> {
        let schema = schema::table(table)?;
        if filters.is_empty() {
            return Err(StoreError::Unfiltered {
                op: StoreOp::Delete,
                table: schema.name.to_string(),
            });
        }
        let (where_sql, binds) = where_clause(schema, filters, 1)?;
        let sql = format!("DELETE FROM {} AS t{where_sql}", quote(schema.name));

        let mut query = sqlx::query(&sql);
        for value in binds {
            query = query.bind(value);
        }
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

// ---------------------------------------------------------------------------
// SQL helpers
// ---------------------------------------------------------------------------

/// Double-quote an identifier already validated against the schema.
fn quote(identifier: &str) -> String {
    format!("\"{identifier}\"")
}

fn column_list(columns: &[String], prefix: &str) -> String {
    columns
        .iter()
        .map(|c| format!("{prefix}{}", quote(c)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Union of the columns present in `rows`, validated and in stable order.
fn payload_columns(schema: &TableSchema, rows: &[Record]) -> Result<Vec<String>, StoreError> {
    let mut columns = BTreeSet::new();
    for row in rows {
        schema.check_record(row)?;
        columns.extend(row.keys().cloned());
    }
    Ok(columns.into_iter().collect())
}

/// Build ` WHERE ...` comparing each column's JSON value to a bound `jsonb`
/// parameter, numbering parameters from `first_param`.
fn where_clause(
    schema: &TableSchema,
    filters: &[Filter],
    first_param: usize,
) -> Result<(String, Vec<Value>), StoreError> {
    if filters.is_empty() {
        return Ok((String::new(), Vec::new()));
    }

    let mut clauses = Vec::with_capacity(filters.len());
    let mut binds = Vec::with_capacity(filters.len());
    for (offset, filter) in filters.iter().enumerate() {
        schema.check_column(filter.column())?;
        let param = first_param + offset;
        let (op, value) = match filter {
            Filter::Eq(_, value) => ("=", value),
            Filter::Neq(_, value) => ("<>", value),
        };
        clauses.push(format!(
            "(to_jsonb(t) -> '{}') {op} ${param}::jsonb",
            filter.column()
        ));
        binds.push(value.clone());
    }

    Ok((format!(" WHERE {}", clauses.join(" AND ")), binds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn statistics() -> &'static TableSchema {
        schema::table("statistics").unwrap()
    }

    #[test]
    fn test_where_clause_numbers_parameters() {
        let (sql, binds) = where_clause(
            statistics(),
            &[Filter::eq("number", "65"), Filter::neq("id", "x")],
            2,
        )
        .unwrap();
        assert_eq!(
            sql,
            " WHERE (to_jsonb(t) -> 'number') = $2::jsonb AND (to_jsonb(t) -> 'id') <> $3::jsonb"
        );
        assert_eq!(binds, vec![json!("65"), json!("x")]);
    }

    #[test]
    fn test_where_clause_empty() {
        let (sql, binds) = where_clause(statistics(), &[], 1).unwrap();
        assert!(sql.is_empty());
        assert!(binds.is_empty());
    }

    #[test]
    fn test_where_clause_rejects_unknown_column() {
        let result = where_clause(statistics(), &[Filter::eq("1=1; --", 1)], 1);
        assert_matches!(result, Err(StoreError::UnknownColumn { .. }));
    }

    #[test]
    fn test_payload_columns_union_sorted() {
        let rows = vec![
            into_record("statistics", json!({"number": "1", "display_order": 0})).unwrap(),
            into_record("statistics", json!({"description": "d"})).unwrap(),
        ];
        let cols = payload_columns(statistics(), &rows).unwrap();
        assert_eq!(cols, vec!["description", "display_order", "number"]);
        assert_eq!(
            column_list(&cols, "p."),
            "p.\"description\", p.\"display_order\", p.\"number\""
        );
    }
}
