//! Data layer for the Harva content service.
//!
//! - [`store`] -- the [`ContentStore`](store::ContentStore) data API and its
//!   PostgreSQL and in-memory implementations.
//! - [`schema`] -- the registry of tables and columns the store accepts.
//! - [`models`] -- row structs, drafts, and their write payloads.
//! - [`reconcile`] -- the generic load / save / replace routines.
//! - [`repositories`] -- one repository per content section.
//! - [`session`] -- the load -> edit -> save -> refetch lifecycle.

pub mod models;
pub mod reconcile;
pub mod repositories;
pub mod schema;
pub mod session;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
