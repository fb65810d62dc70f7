//! Domain primitives and ports for the todo service.
//!
//! Purpose: define the todo entity, its validated building blocks, and the
//! transport-agnostic error type. Inbound adapters translate requests into
//! these types; outbound adapters persist them behind [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): failure carried back to adapters.
//! - ErrorCode (alias to `error::ErrorCode`): stable failure category.
//! - Todo, TodoId, TodoTitle: the entity and its validated fields.
//! - TodoUpdate, ColumnAssignment: partial update request and its ordered
//!   column assignments.

pub mod error;
pub mod ports;
pub mod todo;

pub use self::error::{Error, ErrorCode};
pub use self::todo::{
    ColumnAssignment, TITLE_MAX_CHARS, Todo, TodoId, TodoIdError, TodoTitle, TodoTitleError,
    TodoUpdate,
};
