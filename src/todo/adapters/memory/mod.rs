//! In-memory repository for to-do items.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{NewTodoItem, TodoId, TodoItem},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory to-do repository.
///
/// Identifiers start at 1 and are never reused, so ascending key order is
/// also insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    items: BTreeMap<TodoId, TodoItem>,
    last_id: i32,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.items.get(&id).cloned())
    }

    async fn list_all(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.items.values().cloned().collect())
    }

    async fn insert(&self, item: &NewTodoItem) -> TodoRepositoryResult<TodoItem> {
        let mut state = self.state.write().map_err(lock_error)?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| {
                TodoRepositoryError::persistence(std::io::Error::other(
                    "to-do identifier space exhausted",
                ))
            })?;
        state.last_id = next;

        let stored = item.clone().into_stored(TodoId::new(next));
        state.items.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn replace(&self, item: &TodoItem) -> TodoRepositoryResult<Option<TodoItem>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(existing) = state.items.get_mut(&item.id()) else {
            return Ok(None);
        };
        *existing = item.clone();
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.items.remove(&id).is_some())
    }
}
