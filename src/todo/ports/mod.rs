//! Port contracts for to-do persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the lifecycle
//! service.

pub mod repository;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
