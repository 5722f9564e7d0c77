//! `SQLite` adapters for to-do persistence.
//!
//! The default pool opens a private in-memory database, so contents live only
//! as long as the repository.

mod models;
mod repository;
mod schema;

pub use repository::{SqliteTodoRepository, TodoSqlitePool};
