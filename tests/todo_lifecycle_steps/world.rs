//! Shared world state for to-do lifecycle BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{ManualClock, reference_time};
use rstest::fixture;
use todo_service::todo::{
    adapters::memory::InMemoryTodoRepository, domain::TodoItem, services::TodoLifecycleService,
};

/// Service type used by the BDD world.
pub type TestTodoService = TodoLifecycleService<InMemoryTodoRepository, ManualClock>;

/// Scenario world for to-do lifecycle behaviour tests.
pub struct TodoWorld {
    pub service: TestTodoService,
    pub clock: Arc<ManualClock>,
    pub current_item: Option<TodoItem>,
    pub last_result: Option<Option<TodoItem>>,
}

impl TodoWorld {
    /// Creates a world over an empty store with the clock at the reference
    /// instant.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::at(reference_time()));
        let service = TodoLifecycleService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::clone(&clock),
        );
        Self {
            service,
            clock,
            current_item: None,
            last_result: None,
        }
    }

    /// Returns the item the scenario is working on.
    pub fn current_item(&self) -> Result<&TodoItem, eyre::Report> {
        self.current_item
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no to-do item has been created in this scenario"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
