//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the todo repository
//! port backed by PostgreSQL via Diesel with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the repository only translates between Diesel rows and
//!   domain types. Validation lives in the domain and inbound layers.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Lazy bootstrap**: the pool opens no connection until first use, and the
//!   `todos` table is created on the first repository call.
//!
//! # Example
//!
//! ```no_run
//! use todo_backend::outbound::persistence::{
//!     DbPool, DieselTodoRepository, PersistenceHandle, PoolConfig,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/todos"));
//! let repo = DieselTodoRepository::new(PersistenceHandle::new(pool));
//! # let _ = repo;
//! ```

mod diesel_todo_repository;
mod handle;
mod models;
mod pool;
mod schema;
mod schema_guard;

pub use diesel_todo_repository::DieselTodoRepository;
pub use handle::PersistenceHandle;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use schema::CREATE_TODOS_TABLE_SQL;
pub use schema_guard::{SchemaBootstrap, SchemaError, SchemaGuard};
