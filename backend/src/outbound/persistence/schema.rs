//! Diesel table definition and bootstrap DDL for the `todos` table.
//!
//! The table is created at runtime by [`CREATE_TODOS_TABLE_SQL`]; there is no
//! migration history. Keep the `table!` block and the DDL in step.

/// Idempotent DDL issued once per process before the first query.
pub const CREATE_TODOS_TABLE_SQL: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

diesel::table! {
    /// Tracked tasks, newest first by `created_at`.
    todos (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Trimmed title text (1-120 characters, enforced by the domain).
        title -> Text,
        /// Completion flag; defaults to false.
        completed -> Bool,
        /// Creation timestamp; defaults to `NOW()`.
        created_at -> Timestamptz,
    }
}
