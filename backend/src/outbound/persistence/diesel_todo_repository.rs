//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.
//!
//! Every operation first ensures the `todos` table exists, then issues a
//! single statement on a pooled connection. An update naming no fields
//! returns before either step.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncPgConnection;
use diesel_async::RunQueryDsl;
use diesel_async::pooled_connection::bb8::PooledConnection;
use tracing::debug;

use crate::domain::ports::{TodoRepository, TodoRepositoryError, UpdateOutcome};
use crate::domain::{ColumnAssignment, Todo, TodoId, TodoTitle, TodoUpdate};

use super::handle::PersistenceHandle;
use super::models::{NewTodoRow, TodoChangeset, TodoRow};
use super::pool::PoolError;
use super::schema::todos;
use super::schema_guard::SchemaError;

/// Diesel-backed implementation of the `TodoRepository` port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    persistence: PersistenceHandle,
}

impl DieselTodoRepository {
    /// Create a new repository over the shared persistence handle.
    pub fn new(persistence: PersistenceHandle) -> Self {
        Self { persistence }
    }

    async fn checkout(
        &self,
    ) -> Result<PooledConnection<'_, AsyncPgConnection>, TodoRepositoryError> {
        self.persistence
            .ensure_schema()
            .await
            .map_err(map_schema_error)?;
        self.persistence.connection().await.map_err(map_pool_error)
    }
}

fn map_pool_error(error: PoolError) -> TodoRepositoryError {
    match error {
        PoolError::Checkout { message } => TodoRepositoryError::connection(message),
    }
}

fn map_schema_error(error: SchemaError) -> TodoRepositoryError {
    match error {
        SchemaError::Connection { message } => TodoRepositoryError::connection(message),
        SchemaError::Statement { message } => TodoRepositoryError::schema(message),
    }
}

/// Map Diesel errors to domain todo repository errors.
fn map_diesel_error(error: diesel::result::Error) -> TodoRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::QueryBuilderError(_) => TodoRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TodoRepositoryError::connection("database connection error")
        }
        _ => TodoRepositoryError::query("database error"),
    }
}

/// Convert a database row to a domain todo.
fn row_to_todo(row: TodoRow) -> Result<Todo, TodoRepositoryError> {
    let id = TodoId::new(row.id).map_err(|err| {
        TodoRepositoryError::query(format!("stored todo has invalid id {}: {err}", row.id))
    })?;
    Ok(Todo {
        id,
        title: row.title,
        completed: row.completed,
        created_at: row.created_at,
    })
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut conn = self.checkout().await?;

        let rows: Vec<TodoRow> = todos::table
            .select(TodoRow::as_select())
            .order((todos::created_at.desc(), todos::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_todo).collect()
    }

    async fn create(&self, title: &TodoTitle) -> Result<Todo, TodoRepositoryError> {
        let mut conn = self.checkout().await?;

        let row: TodoRow = diesel::insert_into(todos::table)
            .values(&NewTodoRow {
                title: title.as_str(),
            })
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_todo(row)
    }

    async fn update(
        &self,
        id: TodoId,
        changes: &TodoUpdate,
    ) -> Result<UpdateOutcome, TodoRepositoryError> {
        let assignments = changes.assignments();
        let Some(changeset) = TodoChangeset::from_assignments(&assignments) else {
            return Ok(UpdateOutcome::NoFieldsProvided);
        };
        debug!(
            todo_id = %id,
            columns = ?assignments.iter().map(ColumnAssignment::column).collect::<Vec<_>>(),
            "updating todo"
        );

        let mut conn = self.checkout().await?;

        let row: Option<TodoRow> = diesel::update(todos::table.find(id.get()))
            .set(&changeset)
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        match row {
            Some(row) => row_to_todo(row).map(UpdateOutcome::Updated),
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError> {
        let mut conn = self.checkout().await?;

        let affected = diesel::delete(todos::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
