//! Parallel writers against the in-memory store.

use super::helpers::{TestService, service};
use rstest::rstest;
use std::collections::BTreeSet;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_creates_receive_distinct_ids(service: TestService) -> Result<(), eyre::Report> {
    let handles: Vec<_> = (0..32)
        .map(|index| {
            let worker = service.clone();
            tokio::spawn(async move { worker.create(format!("task {index}"), None).await })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        let item = handle.await??;
        ids.insert(item.id().value());
    }

    eyre::ensure!(ids.len() == 32, "expected 32 distinct ids, got {}", ids.len());
    eyre::ensure!(
        ids.iter().copied().eq(1..=32),
        "ids should be exactly 1..=32"
    );
    eyre::ensure!(service.list().await?.len() == 32, "every item stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_completion_keeps_flag_and_stamp_aligned(
    service: TestService,
) -> Result<(), eyre::Report> {
    let created = service.create("shared", None).await?;

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let worker = service.clone();
            let id = created.id();
            tokio::spawn(async move { worker.mark_completed(id).await })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    let stored = service
        .get(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("item should exist"))?;
    eyre::ensure!(stored.is_completed(), "item completed");
    eyre::ensure!(stored.completed_at().is_some(), "stamp present");
    Ok(())
}
