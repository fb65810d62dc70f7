//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod todo_repository;

#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::{TodoRepository, TodoRepositoryError, UpdateOutcome};
