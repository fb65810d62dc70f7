//! Port for todo persistence.
//!
//! The [`TodoRepository`] trait is the only path through which todos are read
//! or written. Adapters own the SQL and the row-to-entity mapping; callers see
//! only domain types.

use async_trait::async_trait;

use crate::domain::{Todo, TodoId, TodoTitle, TodoUpdate};

use super::define_port_error;

define_port_error! {
    /// Errors raised by todo repository adapters.
    pub enum TodoRepositoryError {
        /// A connection could not be checked out of the pool.
        Connection { message: String } =>
            "todo repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "todo repository query failed: {message}",
        /// The `todos` table could not be ensured before running a query.
        Schema { message: String } =>
            "todo schema initialisation failed: {message}",
    }
}

/// Result of applying a [`TodoUpdate`].
///
/// The two "nothing happened" cases stay distinct so that a caller which
/// skipped payload validation cannot mistake an empty update for a missing
/// row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The row existed and now holds the returned state.
    Updated(Todo),
    /// No row has the requested id.
    NotFound,
    /// The update named no fields; storage was not touched.
    NoFieldsProvided,
}

/// Port for todo storage and retrieval.
///
/// Every operation is a single atomic statement; implementations must not
/// open multi-statement transactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Return every todo, newest `created_at` first.
    ///
    /// An empty table yields an empty vector, not an error.
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Insert a new todo with `completed = false`.
    ///
    /// Returns the stored entity, including the generated id and creation
    /// timestamp.
    async fn create(&self, title: &TodoTitle) -> Result<Todo, TodoRepositoryError>;

    /// Apply the supplied fields to an existing todo.
    ///
    /// Returns [`UpdateOutcome::NoFieldsProvided`] without touching storage
    /// when `changes` is empty. That path also skips the schema bootstrap
    /// every other operation runs first.
    async fn update(
        &self,
        id: TodoId,
        changes: &TodoUpdate,
    ) -> Result<UpdateOutcome, TodoRepositoryError>;

    /// Remove a todo, returning whether a row was actually deleted.
    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        TodoRepositoryError::connection("pool timed out"),
        "todo repository connection failed: pool timed out"
    )]
    #[case(
        TodoRepositoryError::query("database error"),
        "todo repository query failed: database error"
    )]
    #[case(
        TodoRepositoryError::schema("permission denied"),
        "todo schema initialisation failed: permission denied"
    )]
    fn errors_format_with_context(#[case] error: TodoRepositoryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[tokio::test]
    async fn mock_repository_distinguishes_update_outcomes() {
        let mut repo = MockTodoRepository::new();
        repo.expect_update()
            .withf(|_, changes| changes.is_empty())
            .returning(|_, _| Ok(UpdateOutcome::NoFieldsProvided));
        repo.expect_update()
            .withf(|_, changes| !changes.is_empty())
            .returning(|_, _| Ok(UpdateOutcome::NotFound));

        let id = TodoId::new(3).expect("positive id");
        let empty = repo
            .update(id, &TodoUpdate::default())
            .await
            .expect("mock update");
        let missing = repo
            .update(
                id,
                &TodoUpdate {
                    title: None,
                    completed: Some(true),
                },
            )
            .await
            .expect("mock update");

        assert_eq!(empty, UpdateOutcome::NoFieldsProvided);
        assert_eq!(missing, UpdateOutcome::NotFound);
    }
}
