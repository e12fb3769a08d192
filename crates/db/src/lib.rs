//! PostgreSQL persistence for the merchandising back-office.
//!
//! Models and repositories follow one pattern: a row struct deriving
//! `FromRow`, a draft DTO carrying operator input, and a zero-sized
//! repository whose methods take `&PgPool`. The [`gateways`] module adapts
//! those repositories to the placement engine's gateway trait.

use sqlx::postgres::PgPoolOptions;

pub mod gateways;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
