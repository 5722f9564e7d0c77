//! To-do item aggregate and its completion rules.

use super::TodoId;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// To-do item that has not yet been assigned an identity by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl NewTodoItem {
    /// Creates an open to-do item stamped with the clock's current time.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self {
            title: title.into(),
            description,
            created_at: clock.utc(),
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches the storage-assigned identity, producing a stored item.
    ///
    /// New items are always open, so the result has no completion time.
    #[must_use]
    pub fn into_stored(self, id: TodoId) -> TodoItem {
        TodoItem {
            id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            completed_at: None,
        }
    }
}

/// Stored to-do item.
///
/// Completion is carried solely by `completed_at`: an item is completed
/// exactly when it has a completion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id: TodoId,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Caller-supplied replacement values for an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    /// New title.
    pub title: String,
    /// New description; `None` clears it.
    pub description: Option<String>,
    /// Requested completion flag.
    pub is_completed: bool,
}

impl TodoItem {
    /// Reconstructs an item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the item is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Overwrites the caller-editable fields.
    ///
    /// Completing an open item stamps the current time. Completing an item
    /// that already carries a completion time keeps the original stamp.
    /// Reopening always clears it.
    pub fn apply_changes(&mut self, changes: TodoChanges, clock: &(impl Clock + ?Sized)) {
        let TodoChanges {
            title,
            description,
            is_completed,
        } = changes;
        self.title = title;
        self.description = description;

        if !is_completed {
            self.completed_at = None;
        } else if self.completed_at.is_none() {
            self.completed_at = Some(clock.utc());
        }
    }

    /// Marks the item completed, refreshing the completion time even when it
    /// was already completed.
    pub fn mark_completed(&mut self, clock: &(impl Clock + ?Sized)) {
        self.completed_at = Some(clock.utc());
    }
}
