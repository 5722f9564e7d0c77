//! Repository port for to-do persistence and lookup.

use crate::todo::domain::{NewTodoItem, TodoId, TodoItem};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for to-do repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// To-do persistence contract.
///
/// Absent identities are reported through `None` or `false`, never through
/// an error.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Finds an item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn find(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Returns every stored item in storage-defined order.
    async fn list_all(&self) -> TodoRepositoryResult<Vec<TodoItem>>;

    /// Stores a new item and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn insert(&self, item: &NewTodoItem) -> TodoRepositoryResult<TodoItem>;

    /// Replaces the stored item carrying the same identifier.
    ///
    /// Returns `None` when no item with that identifier exists.
    async fn replace(&self, item: &TodoItem) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Deletes an item, returning whether it existed.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool>;
}

/// Errors returned by to-do repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
