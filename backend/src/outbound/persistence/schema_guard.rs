//! One-time, idempotent creation of the `todos` table.
//!
//! [`SchemaGuard`] pairs a [`SchemaBootstrap`] with a single-execution cell.
//! The first successful [`SchemaGuard::ensure`] runs the DDL; every later call
//! returns immediately. A failed attempt leaves the cell empty so the next
//! caller retries. Concurrent first callers wait on the same initialisation.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;
use tokio::sync::OnceCell;
use tracing::info;

use super::pool::{DbPool, PoolError};
use super::schema::CREATE_TODOS_TABLE_SQL;

/// Errors raised while ensuring the schema exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No connection was available to run the DDL.
    #[error("schema bootstrap could not connect: {message}")]
    Connection { message: String },
    /// The DDL statement itself failed.
    #[error("schema bootstrap statement failed: {message}")]
    Statement { message: String },
}

impl From<PoolError> for SchemaError {
    fn from(error: PoolError) -> Self {
        match error {
            PoolError::Checkout { message } => Self::Connection { message },
        }
    }
}

/// Executes the table-creation DDL.
///
/// Implementations must be safe to run more than once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchemaBootstrap: Send + Sync {
    /// Issue `CREATE TABLE IF NOT EXISTS todos (...)`.
    async fn create_todos_table(&self) -> Result<(), SchemaError>;
}

#[async_trait]
impl SchemaBootstrap for DbPool {
    async fn create_todos_table(&self) -> Result<(), SchemaError> {
        let mut conn = self.get().await?;
        diesel::sql_query(CREATE_TODOS_TABLE_SQL)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| SchemaError::Statement {
                message: err.to_string(),
            })
    }
}

/// Idempotent "ensure table exists" step shared by every repository call.
pub struct SchemaGuard<B> {
    bootstrap: B,
    ensured: OnceCell<()>,
}

impl<B: SchemaBootstrap> SchemaGuard<B> {
    /// Wrap a bootstrap; nothing runs until the first [`SchemaGuard::ensure`].
    pub fn new(bootstrap: B) -> Self {
        Self {
            bootstrap,
            ensured: OnceCell::new(),
        }
    }

    /// Make sure the `todos` table exists.
    ///
    /// # Errors
    ///
    /// Propagates the bootstrap failure; the next call tries again.
    pub async fn ensure(&self) -> Result<(), SchemaError> {
        self.ensured
            .get_or_try_init(|| async {
                self.bootstrap.create_todos_table().await?;
                info!("todos table ensured");
                Ok(())
            })
            .await
            .map(|_| ())
    }

    /// Return true once the table has been ensured in this process.
    pub fn is_ensured(&self) -> bool {
        self.ensured.initialized()
    }
}
