//! Demo data population against the in-memory store.

use super::helpers::{TestService, service};
use rstest::rstest;
use todo_service::todo::services::seed_demo_items;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeding_populates_three_sample_items(service: TestService) -> Result<(), eyre::Report> {
    let seeded = seed_demo_items(&service).await?;
    let items = service.list().await?;

    eyre::ensure!(seeded == 3, "expected 3 seeded items, got {seeded}");
    let titles: Vec<&str> = items.iter().map(|item| item.title()).collect();
    eyre::ensure!(
        titles == ["Sample Task 1", "Sample Task 2", "Demo Task 3"],
        "unexpected titles {titles:?}"
    );
    let completed: Vec<bool> = items.iter().map(|item| item.is_completed()).collect();
    eyre::ensure!(completed == [false, true, false], "only the second is done");
    eyre::ensure!(
        items
            .iter()
            .all(|item| item.is_completed() == item.completed_at().is_some()),
        "flag and stamp must agree"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeding_leaves_populated_store_alone(service: TestService) -> Result<(), eyre::Report> {
    service.create("mine", None).await?;

    let seeded = seed_demo_items(&service).await?;

    eyre::ensure!(seeded == 0, "populated store must not be seeded");
    eyre::ensure!(service.list().await?.len() == 1, "existing item untouched");
    Ok(())
}
