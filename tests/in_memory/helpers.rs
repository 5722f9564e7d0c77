//! Shared test helpers for in-memory repository integration tests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use todo_service::todo::{
    adapters::memory::InMemoryTodoRepository, services::TodoLifecycleService,
};

/// Service type used across in-memory integration tests.
pub type TestService = TodoLifecycleService<InMemoryTodoRepository, DefaultClock>;

/// Provides a service over a fresh in-memory repository and the system clock.
#[fixture]
pub fn service() -> TestService {
    TodoLifecycleService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Asserts that `stamp` falls inside the `[before, after]` window.
///
/// # Errors
///
/// Returns an error naming the window when the stamp lies outside it.
pub fn ensure_within(
    stamp: DateTime<Utc>,
    before: DateTime<Utc>,
    after: DateTime<Utc>,
) -> Result<(), eyre::Report> {
    eyre::ensure!(
        before <= stamp && stamp <= after,
        "timestamp {stamp} outside window {before}..={after}"
    );
    Ok(())
}
