//! Diesel row models for to-do persistence.

use super::schema::todos;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for to-do records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoRow {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Display title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp (UTC).
    pub created_at: NaiveDateTime,
    /// Completion timestamp (UTC).
    pub completed_at: Option<NaiveDateTime>,
}

/// Insert model for to-do records; the identifier is assigned by `SQLite`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Display title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp (UTC).
    pub created_at: NaiveDateTime,
}

/// Replacement values for an existing record.
///
/// `None` values are written as `NULL` rather than skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub struct TodoChangesetRow {
    /// Display title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion timestamp (UTC).
    pub completed_at: Option<NaiveDateTime>,
}
