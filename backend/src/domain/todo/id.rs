//! Storage-assigned todo identifier.

use std::fmt;
use std::str::FromStr;

/// Validation errors raised when building a [`TodoId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TodoIdError {
    /// The raw value is not a base-10 integer that fits the id column.
    #[error("todo id must be an integer")]
    Malformed,
    /// Zero and negative values never identify a row.
    #[error("todo id must be positive")]
    NotPositive,
}

/// Positive integer identifier backed by the `SERIAL` primary key.
///
/// # Examples
/// ```
/// use todo_backend::domain::{TodoId, TodoIdError};
///
/// let id: TodoId = "42".parse().expect("valid id");
/// assert_eq!(id.get(), 42);
/// assert_eq!("0".parse::<TodoId>(), Err(TodoIdError::NotPositive));
/// assert_eq!("abc".parse::<TodoId>(), Err(TodoIdError::Malformed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(i32);

impl TodoId {
    /// Wrap a raw key, rejecting values that cannot name a row.
    pub fn new(value: i32) -> Result<Self, TodoIdError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TodoIdError::NotPositive)
        }
    }

    /// Raw key value as stored in the `id` column.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for TodoId {
    type Err = TodoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<i32>().map_err(|_| TodoIdError::Malformed)?;
        Self::new(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
