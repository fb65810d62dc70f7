//! Validated todo title.

/// Maximum title length, counted in Unicode scalar values after trimming.
pub const TITLE_MAX_CHARS: usize = 120;

/// Validation errors raised when building a [`TodoTitle`].
///
/// The display strings are surfaced to HTTP clients verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TodoTitleError {
    /// Nothing remains after trimming surrounding whitespace.
    #[error("Title cannot be empty")]
    Empty,
    /// The trimmed title exceeds [`TITLE_MAX_CHARS`].
    #[error("Title is too long")]
    TooLong,
}

/// Title text, trimmed and between 1 and [`TITLE_MAX_CHARS`] characters.
///
/// # Examples
/// ```
/// use todo_backend::domain::{TodoTitle, TodoTitleError};
///
/// let title = TodoTitle::new("  Buy milk ").expect("valid title");
/// assert_eq!(title.as_str(), "Buy milk");
/// assert_eq!(TodoTitle::new("   "), Err(TodoTitleError::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Trim and validate raw input.
    pub fn new(raw: &str) -> Result<Self, TodoTitleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoTitleError::Empty);
        }
        if trimmed.chars().count() > TITLE_MAX_CHARS {
            return Err(TodoTitleError::TooLong);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
