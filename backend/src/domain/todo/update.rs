//! Partial update requests and their column assignments.

use super::TodoTitle;

/// A single `column = value` pair applied by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAssignment<'a> {
    /// Replace the title text.
    Title(&'a str),
    /// Set the completion flag.
    Completed(bool),
}

impl ColumnAssignment<'_> {
    /// Name of the column this assignment writes.
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Completed(_) => "completed",
        }
    }
}

/// Fields a caller wants to change on an existing todo.
///
/// Absent fields are left untouched. An update with no fields is valid to
/// construct; repositories report it as a no-op instead of issuing SQL.
///
/// # Examples
/// ```
/// use todo_backend::domain::{ColumnAssignment, TodoTitle, TodoUpdate};
///
/// let update = TodoUpdate {
///     title: Some(TodoTitle::new("Walk dog").expect("valid title")),
///     completed: Some(true),
/// };
/// assert_eq!(
///     update.assignments(),
///     vec![ColumnAssignment::Title("Walk dog"), ColumnAssignment::Completed(true)]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoUpdate {
    pub title: Option<TodoTitle>,
    pub completed: Option<bool>,
}

impl TodoUpdate {
    /// Return true when the update names no fields.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }

    /// Ordered column assignments for the supplied fields.
    ///
    /// The order is fixed (`title` before `completed`) so the generated
    /// statement is deterministic for a given request.
    pub fn assignments(&self) -> Vec<ColumnAssignment<'_>> {
        let title = self
            .title
            .as_ref()
            .map(|title| ColumnAssignment::Title(title.as_str()));
        let completed = self.completed.map(ColumnAssignment::Completed);
        title.into_iter().chain(completed).collect()
    }
}
