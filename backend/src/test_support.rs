//! In-memory repository for handler and behaviour tests.
//!
//! Mirrors the Diesel adapter's observable behaviour (id assignment, newest
//! first ordering, partial updates) without a database.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::ports::{TodoRepository, TodoRepositoryError, UpdateOutcome};
use crate::domain::{ColumnAssignment, Todo, TodoId, TodoTitle, TodoUpdate};

#[derive(Debug)]
struct Store {
    rows: Vec<Todo>,
    next_id: i32,
    clock: DateTime<Utc>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
            clock: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

/// Thread-safe in-memory [`TodoRepository`].
///
/// Every insert advances an internal clock by one millisecond so ordering by
/// `created_at` is deterministic. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    store: Arc<Mutex<Store>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryTodoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a connection error (or recover).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored todos.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    /// Return true when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A panicking test thread must not wedge the remaining steps.
        self.store
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn check_available(&self) -> Result<(), TodoRepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TodoRepositoryError::connection("in-memory store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        self.check_available()?;
        let mut rows = self.lock().rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn create(&self, title: &TodoTitle) -> Result<Todo, TodoRepositoryError> {
        self.check_available()?;
        let mut store = self.lock();
        let id = TodoId::new(store.next_id)
            .map_err(|err| TodoRepositoryError::query(err.to_string()))?;
        store.next_id += 1;
        store.clock += Duration::milliseconds(1);
        let todo = Todo {
            id,
            title: title.as_str().to_owned(),
            completed: false,
            created_at: store.clock,
        };
        store.rows.push(todo.clone());
        Ok(todo)
    }

    async fn update(
        &self,
        id: TodoId,
        changes: &TodoUpdate,
    ) -> Result<UpdateOutcome, TodoRepositoryError> {
        let assignments = changes.assignments();
        if assignments.is_empty() {
            return Ok(UpdateOutcome::NoFieldsProvided);
        }
        self.check_available()?;
        let mut store = self.lock();
        let Some(todo) = store.rows.iter_mut().find(|todo| todo.id == id) else {
            return Ok(UpdateOutcome::NotFound);
        };
        for assignment in assignments {
            match assignment {
                ColumnAssignment::Title(title) => title.clone_into(&mut todo.title),
                ColumnAssignment::Completed(completed) => todo.completed = completed,
            }
        }
        Ok(UpdateOutcome::Updated(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError> {
        self.check_available()?;
        let mut store = self.lock();
        let before = store.rows.len();
        store.rows.retain(|todo| todo.id != id);
        Ok(store.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(raw: &str) -> TodoTitle {
        TodoTitle::new(raw).expect("valid title")
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let repo = InMemoryTodoRepository::new();
        let first = repo.create(&title("First")).await.expect("create");
        let second = repo.create(&title("Second")).await.expect("create");

        let listed = repo.list().await.expect("list");

        assert_eq!(listed, vec![second, first]);
    }

    #[tokio::test]
    async fn update_and_delete_follow_the_port_contract() {
        let repo = InMemoryTodoRepository::new();
        let todo = repo.create(&title("Walk dog")).await.expect("create");

        let outcome = repo
            .update(
                todo.id,
                &TodoUpdate {
                    title: None,
                    completed: Some(true),
                },
            )
            .await
            .expect("update");
        let UpdateOutcome::Updated(updated) = outcome else {
            panic!("expected an updated todo, got {outcome:?}");
        };
        assert!(updated.completed);
        assert_eq!(updated.title, "Walk dog");

        assert!(repo.delete(todo.id).await.expect("delete"));
        assert!(!repo.delete(todo.id).await.expect("second delete"));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn failure_switch_surfaces_connection_errors() {
        let repo = InMemoryTodoRepository::new();
        repo.set_failing(true);

        let err = repo.list().await.expect_err("store offline");
        assert!(matches!(err, TodoRepositoryError::Connection { .. }));
    }
}
