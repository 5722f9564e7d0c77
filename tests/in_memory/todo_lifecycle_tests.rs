//! In-memory integration tests for to-do lifecycle operations.

use super::helpers::{TestService, ensure_within, service};
use chrono::Utc;
use rstest::rstest;
use todo_service::todo::{domain::TodoId, services::UpdateTodoRequest};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_item_is_open_and_stamped_now(service: TestService) -> Result<(), eyre::Report> {
    let before = Utc::now();
    let created = service
        .create("Buy milk", Some("2 litres".to_owned()))
        .await?;
    let after = Utc::now();

    eyre::ensure!(created.id() == TodoId::new(1), "first id should be 1");
    eyre::ensure!(!created.is_completed(), "new items start open");
    eyre::ensure!(created.completed_at().is_none(), "open items carry no stamp");
    ensure_within(created.created_at(), before, after)?;

    let fetched = service.get(created.id()).await?;
    eyre::ensure!(fetched.as_ref() == Some(&created), "lookup should match creation");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mark_completed_stamps_current_time(service: TestService) -> Result<(), eyre::Report> {
    let created = service.create("Renew passport", None).await?;

    let before = Utc::now();
    let completed = service
        .mark_completed(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("item should exist"))?;
    let after = Utc::now();

    eyre::ensure!(completed.is_completed(), "item should be completed");
    let stamp = completed
        .completed_at()
        .ok_or_else(|| eyre::eyre!("completed item should carry a stamp"))?;
    ensure_within(stamp, before, after)?;
    eyre::ensure!(
        completed.created_at() == created.created_at(),
        "creation time must not move"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_round_trip_reopens_item(service: TestService) -> Result<(), eyre::Report> {
    let created = service.create("Call plumber", None).await?;
    service.mark_completed(created.id()).await?;

    let reopened = service
        .update(
            UpdateTodoRequest::new(created.id(), "Call plumber again", false)
                .with_description("Leak under sink"),
        )
        .await?
        .ok_or_else(|| eyre::eyre!("item should exist"))?;

    eyre::ensure!(reopened.title() == "Call plumber again", "title replaced");
    eyre::ensure!(
        reopened.description() == Some("Leak under sink"),
        "description replaced"
    );
    eyre::ensure!(!reopened.is_completed(), "item reopened");
    eyre::ensure!(reopened.completed_at().is_none(), "stamp cleared");

    let stored = service.get(created.id()).await?;
    eyre::ensure!(stored == Some(reopened), "reopened item persisted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_ids_are_not_reused(service: TestService) -> Result<(), eyre::Report> {
    let first = service.create("first", None).await?;
    eyre::ensure!(service.delete(first.id()).await?, "delete should succeed");

    let second = service.create("second", None).await?;

    eyre::ensure!(second.id() == TodoId::new(2), "ids keep increasing");
    eyre::ensure!(service.get(first.id()).await?.is_none(), "deleted item gone");
    eyre::ensure!(!service.delete(first.id()).await?, "second delete reports absence");
    Ok(())
}
