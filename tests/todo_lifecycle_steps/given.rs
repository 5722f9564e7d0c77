//! Given steps for to-do lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use chrono::Duration;
use eyre::WrapErr;
use mockable::Clock;
use rstest_bdd_macros::given;

#[given("an empty to-do store")]
fn empty_store(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let items = run_async(world.service.list()).wrap_err("list items in fresh store")?;
    if !items.is_empty() {
        return Err(eyre::eyre!("expected an empty store, found {} items", items.len()));
    }
    Ok(())
}

#[given(r#"a to-do titled "{title}" has been created"#)]
fn item_already_created(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    let created =
        run_async(world.service.create(title, None)).wrap_err("create item for scenario")?;
    world.current_item = Some(created);
    Ok(())
}

#[given("the item was marked complete {days:i64} day ago")]
fn item_completed_days_ago(world: &mut TodoWorld, days: i64) -> Result<(), eyre::Report> {
    let id = world.current_item()?.id();
    let completed = run_async(world.service.mark_completed(id))
        .wrap_err("mark item complete")?
        .ok_or_else(|| eyre::eyre!("item {id} vanished before completion"))?;
    if completed.completed_at() != Some(world.clock.utc()) {
        return Err(eyre::eyre!("completion was not stamped with the current time"));
    }
    world.current_item = Some(completed);
    world.clock.advance(Duration::days(days));
    Ok(())
}
