//! Internal Diesel row structs for the `todos` table.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::ColumnAssignment;

use super::schema::todos;

/// Row struct for reading from the todos table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: i32,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new todo records.
///
/// `completed` and `created_at` fall back to their column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub(crate) struct NewTodoRow<'a> {
    pub title: &'a str,
}

/// Changeset struct for partial todo updates.
///
/// `None` fields are skipped by Diesel, so only supplied columns are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = todos)]
pub(crate) struct TodoChangeset<'a> {
    pub title: Option<&'a str>,
    pub completed: Option<bool>,
}

impl<'a> TodoChangeset<'a> {
    /// Fold column assignments into a changeset.
    ///
    /// Returns `None` when there is nothing to write; Diesel rejects an empty
    /// changeset at execution time.
    pub fn from_assignments(assignments: &[ColumnAssignment<'a>]) -> Option<Self> {
        if assignments.is_empty() {
            return None;
        }
        let changeset = assignments
            .iter()
            .fold(Self::default(), |mut changeset, assignment| {
                match *assignment {
                    ColumnAssignment::Title(title) => changeset.title = Some(title),
                    ColumnAssignment::Completed(completed) => {
                        changeset.completed = Some(completed);
                    }
                }
                changeset
            });
        Some(changeset)
    }
}
