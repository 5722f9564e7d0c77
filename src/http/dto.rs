//! JSON request and response bodies for the to-do API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::FieldError;
use crate::todo::domain::{TodoId, TodoItem};

/// Wire representation of a stored to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Item identifier.
    pub id: TodoId,
    /// Display title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, present only for completed items.
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<TodoItem> for TodoResponse {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id(),
            title: item.title().to_owned(),
            description: item.description().map(ToOwned::to_owned),
            is_completed: item.is_completed(),
            created_at: item.created_at(),
            completed_at: item.completed_at(),
        }
    }
}

/// Body of `POST /api/todo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoBody {
    /// Display title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /api/todo/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoBody {
    /// Replacement title.
    pub title: String,
    /// Replacement description; omitted or `null` clears it.
    #[serde(default)]
    pub description: Option<String>,
    /// Requested completion flag; omitted means `false`.
    #[serde(default)]
    pub is_completed: bool,
}

/// Rejects titles that are empty once surrounding whitespace is removed.
pub(crate) fn validate_title(title: &str) -> Result<(), Vec<FieldError>> {
    if title.trim().is_empty() {
        return Err(vec![FieldError::new("title", "Title must not be blank")]);
    }
    Ok(())
}
