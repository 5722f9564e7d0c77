//! Application services for to-do lifecycle orchestration.

mod demo;
mod lifecycle;

pub use demo::seed_demo_items;
pub use lifecycle::{
    TodoLifecycleError, TodoLifecycleResult, TodoLifecycleService, UpdateTodoRequest,
};
