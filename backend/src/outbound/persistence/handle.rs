//! Process-wide persistence handle.
//!
//! Bundles the connection pool with the schema guard so that every adapter
//! built from the same handle shares one "table ensured" flag.

use std::sync::Arc;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::bb8::PooledConnection;

use super::pool::{DbPool, PoolError};
use super::schema_guard::{SchemaError, SchemaGuard};

/// Shared pool plus one-time schema bootstrap.
///
/// Construct once at startup and clone into each consumer; clones share both
/// the pool and the guard.
#[derive(Clone)]
pub struct PersistenceHandle {
    pool: DbPool,
    schema: Arc<SchemaGuard<DbPool>>,
}

impl PersistenceHandle {
    /// Build a handle over an existing pool.
    pub fn new(pool: DbPool) -> Self {
        let schema = Arc::new(SchemaGuard::new(pool.clone()));
        Self { pool, schema }
    }

    /// Ensure the `todos` table exists, running the DDL at most once.
    ///
    /// # Errors
    ///
    /// Returns the bootstrap failure; a later call retries.
    pub async fn ensure_schema(&self) -> Result<(), SchemaError> {
        self.schema.ensure().await
    }

    /// Check out a pooled connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] when the pool cannot supply a connection.
    pub async fn connection(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.pool.get().await
    }
}
