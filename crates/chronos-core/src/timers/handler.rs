use tracing::{error, info};

use crate::storage::KeyValueStore;

use super::errors::TimerError;
use super::manager::TimerList;
use super::persistence::{load_timers, save_timers};
use super::types::{Timer, TimerDraft, TimerId};

/// Load the persisted list, falling back to empty on any load failure.
pub fn open_list<S: KeyValueStore + ?Sized>(store: &S) -> (TimerList, Option<String>) {
    let data = load_timers(store);
    (TimerList::from_timers(data.timers), data.load_error)
}

pub fn create_timer<S: KeyValueStore + ?Sized>(
    list: &mut TimerList,
    store: &mut S,
    draft: TimerDraft,
) -> Result<Timer, TimerError> {
    info!(event = "core.timers.create_started", title = %draft.title, date = %draft.date);

    let timer = persist_or_rollback(list, store, |list| list.create(draft)).inspect_err(|e| {
        error!(event = "core.timers.create_failed", error = %e);
    })?;

    info!(
        event = "core.timers.create_completed",
        id = %timer.id,
        title = %timer.title
    );
    Ok(timer)
}

pub fn update_timer<S: KeyValueStore + ?Sized>(
    list: &mut TimerList,
    store: &mut S,
    id: TimerId,
    draft: TimerDraft,
) -> Result<Timer, TimerError> {
    info!(event = "core.timers.update_started", id = %id);

    let timer =
        persist_or_rollback(list, store, |list| list.update(id, draft)).inspect_err(|e| {
            error!(event = "core.timers.update_failed", id = %id, error = %e);
        })?;

    info!(event = "core.timers.update_completed", id = %id, date = %timer.date);
    Ok(timer)
}

pub fn delete_timer<S: KeyValueStore + ?Sized>(
    list: &mut TimerList,
    store: &mut S,
    id: TimerId,
) -> Result<Timer, TimerError> {
    info!(event = "core.timers.delete_started", id = %id);

    let timer = persist_or_rollback(list, store, |list| list.delete(id)).inspect_err(|e| {
        error!(event = "core.timers.delete_failed", id = %id, error = %e);
    })?;

    info!(event = "core.timers.delete_completed", id = %id);
    Ok(timer)
}

pub fn get_timer(list: &TimerList, id: TimerId) -> Result<&Timer, TimerError> {
    list.get(id).ok_or(TimerError::NotFound { id })
}

/// Apply `mutate`, then persist the whole list. A failed save restores the
/// list so memory and storage never disagree.
fn persist_or_rollback<S, F>(
    list: &mut TimerList,
    store: &mut S,
    mutate: F,
) -> Result<Timer, TimerError>
where
    S: KeyValueStore + ?Sized,
    F: FnOnce(&mut TimerList) -> Result<Timer, TimerError>,
{
    let before = list.clone();
    let timer = mutate(list)?;

    if let Err(e) = save_timers(store, list.as_slice()) {
        *list = before;
        return Err(e);
    }

    Ok(timer)
}
