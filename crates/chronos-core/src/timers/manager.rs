use super::errors::TimerError;
use super::types::{Timer, TimerDraft, TimerId};

/// Ordered timer list with enforced invariants.
///
/// Key invariants: every id is unique, and insertion order is display order.
/// Updates replace title and date in place; deletes keep the relative order
/// of the remaining timers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimerList {
    timers: Vec<Timer>,
}

impl TimerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from persisted timers.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant
    /// holds even for hand-edited data.
    pub fn from_timers(timers: Vec<Timer>) -> Self {
        let mut list = Self::new();
        for timer in timers {
            if list.get(timer.id).is_some() {
                tracing::warn!(
                    event = "core.timers.duplicate_id_dropped",
                    id = %timer.id,
                    title = %timer.title
                );
                continue;
            }
            list.timers.push(timer);
        }
        list
    }

    /// Append a new timer with a fresh identity.
    ///
    /// # Errors
    /// Returns `IncompleteDraft` or `InvalidDate` when the draft is unusable.
    pub fn create(&mut self, draft: TimerDraft) -> Result<Timer, TimerError> {
        let now_millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.create_at(draft, now_millis)
    }

    /// Like [`TimerList::create`] with an explicit clock reading for the id.
    pub fn create_at(&mut self, draft: TimerDraft, now_millis: u64) -> Result<Timer, TimerError> {
        draft.validate()?;

        let timer = Timer {
            id: self.next_id(now_millis),
            title: draft.title,
            date: draft.date,
        };
        self.timers.push(timer.clone());
        Ok(timer)
    }

    /// Replace title and date of an existing timer.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id, or a draft validation error.
    pub fn update(&mut self, id: TimerId, draft: TimerDraft) -> Result<Timer, TimerError> {
        draft.validate()?;

        let timer = self
            .timers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TimerError::NotFound { id })?;
        timer.title = draft.title;
        timer.date = draft.date;
        Ok(timer.clone())
    }

    /// Remove a timer by id.
    ///
    /// # Errors
    /// Returns `NotFound` if no timer has this id.
    pub fn delete(&mut self, id: TimerId) -> Result<Timer, TimerError> {
        let index = self
            .timers
            .iter()
            .position(|t| t.id == id)
            .ok_or(TimerError::NotFound { id })?;
        Ok(self.timers.remove(index))
    }

    pub fn get(&self, id: TimerId) -> Option<&Timer> {
        self.timers.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Timer> {
        self.timers.iter()
    }

    pub fn as_slice(&self) -> &[Timer] {
        &self.timers
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Millisecond clock reading, bumped past the largest existing id so
    /// identities stay unique and increasing even within one millisecond.
    fn next_id(&self, now_millis: u64) -> TimerId {
        let floor = self
            .timers
            .iter()
            .map(|t| t.id.0.saturating_add(1))
            .max()
            .unwrap_or(0);
        TimerId(now_millis.max(floor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> TimerDraft {
        TimerDraft::new(title, "2030-01-01T00:00")
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = TimerList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_create_appends_single_entry() {
        let mut list = TimerList::new();
        let created = list
            .create(TimerDraft::new("Launch", "2030-06-01T09:30"))
            .unwrap();

        assert_eq!(list.len(), 1);
        let stored = list.get(created.id).unwrap();
        assert_eq!(stored.title, "Launch");
        assert_eq!(stored.date, "2030-06-01T09:30");
    }

    #[test]
    fn test_create_assigns_unique_ids_within_same_millisecond() {
        let mut list = TimerList::new();
        let a = list.create_at(draft("a"), 1_000).unwrap();
        let b = list.create_at(draft("b"), 1_000).unwrap();
        let c = list.create_at(draft("c"), 999).unwrap();

        assert_eq!(a.id, TimerId(1_000));
        assert_eq!(b.id, TimerId(1_001));
        assert_eq!(c.id, TimerId(1_002));
    }

    #[test]
    fn test_create_rejects_incomplete_draft() {
        let mut list = TimerList::new();
        assert!(matches!(
            list.create(TimerDraft::new("", "2030-01-01T00:00")),
            Err(TimerError::IncompleteDraft)
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_update_replaces_title_and_date_in_place() {
        let mut list = TimerList::new();
        let a = list.create_at(draft("a"), 1).unwrap();
        let b = list.create_at(draft("b"), 2).unwrap();

        list.update(a.id, TimerDraft::new("renamed", "2031-02-03T04:05"))
            .unwrap();

        let titles: Vec<&str> = list.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["renamed", "b"]);
        assert_eq!(list.get(a.id).unwrap().date, "2031-02-03T04:05");
        assert_eq!(list.get(b.id).unwrap().date, "2030-01-01T00:00");
    }

    #[test]
    fn test_update_unknown_id() {
        let mut list = TimerList::new();
        assert!(matches!(
            list.update(TimerId(7), draft("x")),
            Err(TimerError::NotFound { id: TimerId(7) })
        ));
    }

    #[test]
    fn test_update_with_bad_date_leaves_timer_untouched() {
        let mut list = TimerList::new();
        let a = list.create_at(draft("a"), 1).unwrap();

        assert!(list.update(a.id, TimerDraft::new("a", "soon")).is_err());
        assert_eq!(list.get(a.id).unwrap().date, "2030-01-01T00:00");
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut list = TimerList::new();
        let a = list.create_at(draft("a"), 1).unwrap();
        let b = list.create_at(draft("b"), 2).unwrap();
        let c = list.create_at(draft("c"), 3).unwrap();
        let d = list.create_at(draft("d"), 4).unwrap();

        let removed = list.delete(b.id).unwrap();

        assert_eq!(removed.title, "b");
        let ids: Vec<TimerId> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a.id, c.id, d.id]);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut list = TimerList::new();
        list.create_at(draft("a"), 1).unwrap();
        assert!(list.delete(TimerId(99)).is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_from_timers_drops_duplicate_ids() {
        let timers = vec![
            Timer {
                id: TimerId(1),
                title: "first".to_string(),
                date: "2030-01-01T00:00".to_string(),
            },
            Timer {
                id: TimerId(1),
                title: "dup".to_string(),
                date: "2030-01-01T00:00".to_string(),
            },
        ];
        let list = TimerList::from_timers(timers);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(TimerId(1)).unwrap().title, "first");
    }
}
