//! Sample data for demonstration deployments.

use super::{TodoLifecycleResult, TodoLifecycleService};
use crate::todo::ports::TodoRepository;
use mockable::Clock;

const DEMO_ITEMS: [(&str, &str, bool); 3] = [
    (
        "Sample Task 1",
        "This is a sample task for demo purposes",
        false,
    ),
    ("Sample Task 2", "This is another sample task", true),
    ("Demo Task 3", "Complete the API demonstration", false),
];

/// Seeds an empty store with three sample items, one of them completed.
///
/// Returns the number of items created; a store that already holds items is
/// left untouched.
///
/// # Errors
///
/// Returns the first lifecycle error raised while seeding.
pub async fn seed_demo_items<R, C>(
    service: &TodoLifecycleService<R, C>,
) -> TodoLifecycleResult<usize>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    if !service.list().await?.is_empty() {
        tracing::debug!("store already populated, skipping demo seed");
        return Ok(0);
    }

    for (title, description, completed) in DEMO_ITEMS {
        let item = service.create(title, Some(description.to_owned())).await?;
        if completed {
            service.mark_completed(item.id()).await?;
        }
    }

    tracing::info!(count = DEMO_ITEMS.len(), "seeded demo to-do items");
    Ok(DEMO_ITEMS.len())
}
