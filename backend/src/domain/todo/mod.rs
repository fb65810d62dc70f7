//! The todo entity and its validated components.
//!
//! A [`Todo`] is only ever produced by a repository: identifiers and creation
//! timestamps are assigned by storage and never change afterwards.

mod id;
mod title;
mod update;

use chrono::{DateTime, SecondsFormat, Utc};

pub use self::id::{TodoId, TodoIdError};
pub use self::title::{TITLE_MAX_CHARS, TodoTitle, TodoTitleError};
pub use self::update::{ColumnAssignment, TodoUpdate};

/// A single tracked task.
///
/// ## Invariants
/// - `id` is positive and immutable once assigned.
/// - `created_at` is immutable and is the sole ordering key (newest first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Canonical ISO-8601 rendering of the creation timestamp.
    ///
    /// Always UTC with millisecond precision and a `Z` suffix, whatever
    /// precision the storage driver returned.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use todo_backend::domain::{Todo, TodoId};
    ///
    /// let todo = Todo {
    ///     id: TodoId::new(1).expect("positive id"),
    ///     title: "Buy milk".to_owned(),
    ///     completed: false,
    ///     created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    /// };
    /// assert_eq!(todo.created_at_iso8601(), "2024-05-01T09:30:00.000Z");
    /// ```
    pub fn created_at_iso8601(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn created_at_truncates_sub_millisecond_precision() {
        let created_at = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp")
            + chrono::Duration::microseconds(123_456);
        let todo = Todo {
            id: TodoId::new(7).expect("positive id"),
            title: "Water plants".to_owned(),
            completed: true,
            created_at,
        };

        assert_eq!(todo.created_at_iso8601(), "2024-01-02T03:04:05.123Z");
    }

    #[rstest]
    fn created_at_round_trips_through_rfc3339() {
        let created_at = Utc::now();
        let todo = Todo {
            id: TodoId::new(1).expect("positive id"),
            title: "Parse me".to_owned(),
            completed: false,
            created_at,
        };

        let parsed = DateTime::parse_from_rfc3339(&todo.created_at_iso8601())
            .expect("canonical timestamp parses");
        assert_eq!(parsed.timestamp_millis(), created_at.timestamp_millis());
    }
}
