//! Diesel schema for to-do persistence.

diesel::table! {
    /// To-do records.
    todos (id) {
        /// Storage-assigned identifier.
        id -> Integer,
        /// Display title.
        title -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Creation timestamp (UTC).
        created_at -> Timestamp,
        /// Completion timestamp (UTC), set only for completed items.
        completed_at -> Nullable<Timestamp>,
    }
}

/// DDL used to create the `todos` table on a fresh database.
pub const CREATE_TODOS_TABLE: &str =
    include_str!("../../../../migrations/2024-05-01-000000_create_todos/up.sql");
