//! Service layer applying completion rules to to-do items.

use crate::todo::{
    domain::{NewTodoItem, TodoChanges, TodoId, TodoItem},
    ports::{TodoRepository, TodoRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for updating a to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    id: TodoId,
    changes: TodoChanges,
}

impl UpdateTodoRequest {
    /// Creates an update request with no description.
    #[must_use]
    pub fn new(id: TodoId, title: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id,
            changes: TodoChanges {
                title: title.into(),
                description: None,
                is_completed,
            },
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.changes.description = Some(description.into());
        self
    }

    /// Sets the replacement description from an optional value.
    #[must_use]
    pub fn with_optional_description(mut self, description: Option<String>) -> Self {
        self.changes.description = description;
        self
    }

    /// Returns the target identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }
}

/// Service-level errors for to-do lifecycle operations.
#[derive(Debug, Error)]
pub enum TodoLifecycleError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for to-do lifecycle service operations.
pub type TodoLifecycleResult<T> = Result<T, TodoLifecycleError>;

/// To-do lifecycle orchestration service.
///
/// Holds no state of its own; every operation is a single read or a
/// read-modify-write against the repository.
pub struct TodoLifecycleService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TodoLifecycleService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TodoLifecycleService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new to-do lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Retrieves an item by identifier.
    ///
    /// Returns `Ok(None)` when the item does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the lookup fails.
    pub async fn get(&self, id: TodoId) -> TodoLifecycleResult<Option<TodoItem>> {
        Ok(self.repository.find(id).await?)
    }

    /// Retrieves every item in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the scan fails.
    pub async fn list(&self) -> TodoLifecycleResult<Vec<TodoItem>> {
        Ok(self.repository.list_all().await?)
    }

    /// Creates an open item stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the repository rejects
    /// persistence.
    pub async fn create(
        &self,
        title: impl Into<String> + Send,
        description: Option<String>,
    ) -> TodoLifecycleResult<TodoItem> {
        let item = NewTodoItem::new(title, description, &*self.clock);
        let stored = self.repository.insert(&item).await?;
        tracing::debug!(id = %stored.id(), "created to-do item");
        Ok(stored)
    }

    /// Overwrites an item's title, description and completion flag.
    ///
    /// Returns `Ok(None)` without touching storage when the item does not
    /// exist. Completing an item that is already completed keeps its original
    /// completion time.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when lookup or replacement
    /// fails.
    pub async fn update(
        &self,
        request: UpdateTodoRequest,
    ) -> TodoLifecycleResult<Option<TodoItem>> {
        let UpdateTodoRequest { id, changes } = request;
        let Some(mut item) = self.repository.find(id).await? else {
            tracing::debug!(%id, "update skipped, to-do item not found");
            return Ok(None);
        };

        item.apply_changes(changes, &*self.clock);
        let replaced = self.repository.replace(&item).await?;
        tracing::debug!(%id, completed = item.is_completed(), "updated to-do item");
        Ok(replaced)
    }

    /// Deletes an item, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when deletion fails.
    pub async fn delete(&self, id: TodoId) -> TodoLifecycleResult<bool> {
        let removed = self.repository.delete(id).await?;
        if removed {
            tracing::debug!(%id, "deleted to-do item");
        } else {
            tracing::debug!(%id, "delete skipped, to-do item not found");
        }
        Ok(removed)
    }

    /// Marks an item completed, always refreshing its completion time.
    ///
    /// Returns `Ok(None)` without touching storage when the item does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when lookup or replacement
    /// fails.
    pub async fn mark_completed(&self, id: TodoId) -> TodoLifecycleResult<Option<TodoItem>> {
        let Some(mut item) = self.repository.find(id).await? else {
            tracing::debug!(%id, "completion skipped, to-do item not found");
            return Ok(None);
        };

        item.mark_completed(&*self.clock);
        let replaced = self.repository.replace(&item).await?;
        tracing::debug!(%id, "marked to-do item completed");
        Ok(replaced)
    }
}
