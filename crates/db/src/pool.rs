//! Database connection pool.
//!
//! The pool goes through sqlx's `any` driver so one store serves Postgres
//! URLs in production and `sqlite:` URLs in tests. The concrete drivers must
//! be registered before the first connect; [`create_pool`] does that.

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared pool handed to [`crate::TodoListStore`].
///
/// The `any` driver picks Postgres or SQLite from the URL scheme.
pub type DbPool = AnyPool;

/// Create a new connection pool from the given `database_url`.
///
/// `max_connections` controls the pool ceiling. Registering the default
/// `any` drivers is idempotent, so calling this repeatedly is fine.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    sqlx::any::install_default_drivers();

    info!("Connecting to database (max_connections={})", max_connections);
    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}
