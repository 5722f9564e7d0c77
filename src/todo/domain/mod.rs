//! Domain model for to-do items.
//!
//! The domain owns the completion rules and stays free of storage and
//! transport concerns.

mod ids;
mod item;

pub use ids::TodoId;
pub use item::{NewTodoItem, PersistedTodoData, TodoChanges, TodoItem};
