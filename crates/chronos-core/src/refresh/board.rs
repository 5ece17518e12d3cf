use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use futures::future::select_all;
use tracing::{debug, warn};

use crate::countdown::Countdown;
use crate::timers::{Timer, TimerId};

use super::clock::Clock;
use super::view::{Frame, TimerView};

/// A listed timer and its mounted view.
#[derive(Debug)]
pub struct BoardEntry {
    pub timer: Timer,
    /// `None` when the stored date cannot be resolved.
    pub view: Option<TimerView>,
    /// Why the timer has no view.
    pub error: Option<String>,
}

impl BoardEntry {
    pub fn frame(&self) -> Option<Frame> {
        self.view.as_ref().and_then(TimerView::frame)
    }

    pub fn countdown(&self) -> Option<Countdown> {
        self.frame().map(|frame| frame.countdown)
    }
}

/// What a [`TimerBoard::sync`] call changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub mounted: usize,
    pub unmounted: usize,
    pub retargeted: usize,
}

impl SyncSummary {
    pub fn is_empty(&self) -> bool {
        self.mounted == 0 && self.unmounted == 0 && self.retargeted == 0
    }
}

/// Mounted views for the dashboard, one per listed timer, in list order.
pub struct TimerBoard {
    clock: Arc<dyn Clock>,
    interval: Duration,
    entries: Vec<BoardEntry>,
}

impl TimerBoard {
    pub fn new(clock: Arc<dyn Clock>, interval: Duration) -> Self {
        Self {
            clock,
            interval,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[BoardEntry] {
        &self.entries
    }

    pub fn get(&self, id: TimerId) -> Option<&BoardEntry> {
        self.entries.iter().find(|entry| entry.timer.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reconcile mounted views with `timers`.
    ///
    /// New timers are mounted, missing ones unmounted, and timers whose date
    /// changed are retargeted. Views of unchanged timers keep running.
    pub fn sync(&mut self, timers: &[Timer]) -> SyncSummary {
        let mut summary = SyncSummary::default();
        let mut existing: HashMap<TimerId, BoardEntry> = self
            .entries
            .drain(..)
            .map(|entry| (entry.timer.id, entry))
            .collect();

        for timer in timers {
            let entry = match existing.remove(&timer.id) {
                Some(mut entry) if entry.timer.date == timer.date => {
                    entry.timer = timer.clone();
                    entry
                }
                Some(mut entry) => {
                    entry.timer = timer.clone();
                    match timer.target_instant() {
                        Ok(target) => {
                            if let Some(view) = entry.view.as_mut() {
                                view.retarget(target);
                                summary.retargeted += 1;
                            } else {
                                entry.view = Some(self.mount(target));
                                summary.mounted += 1;
                            }
                            entry.error = None;
                        }
                        Err(e) => {
                            if entry.view.take().is_some() {
                                summary.unmounted += 1;
                            }
                            warn!(event = "core.refresh.target_invalid", id = %timer.id, error = %e);
                            entry.error = Some(e.to_string());
                        }
                    }
                    entry
                }
                None => {
                    let (view, error) = match timer.target_instant() {
                        Ok(target) => {
                            summary.mounted += 1;
                            (Some(self.mount(target)), None)
                        }
                        Err(e) => {
                            warn!(event = "core.refresh.target_invalid", id = %timer.id, error = %e);
                            (None, Some(e.to_string()))
                        }
                    };
                    BoardEntry {
                        timer: timer.clone(),
                        view,
                        error,
                    }
                }
            };
            self.entries.push(entry);
        }

        // Whatever is left was removed from the list; dropping unmounts.
        summary.unmounted += existing.values().filter(|e| e.view.is_some()).count();
        drop(existing);

        if !summary.is_empty() {
            debug!(
                event = "core.refresh.board_synced",
                mounted = summary.mounted,
                unmounted = summary.unmounted,
                retargeted = summary.retargeted,
                total = self.entries.len()
            );
        }

        summary
    }

    /// Wait until any mounted view publishes a new frame.
    ///
    /// Never resolves while nothing is mounted.
    pub async fn changed(&mut self) {
        let pending: Vec<_> = self
            .entries
            .iter_mut()
            .filter_map(|entry| entry.view.as_mut())
            .map(|view| Box::pin(view.receiver_mut().changed()))
            .collect();

        if pending.is_empty() {
            std::future::pending::<()>().await;
            return;
        }

        let _ = select_all(pending).await;
    }

    fn mount(&self, target: DateTime<FixedOffset>) -> TimerView {
        TimerView::mount(target, Arc::clone(&self.clock), self.interval)
    }
}

impl std::fmt::Debug for TimerBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerBoard")
            .field("interval", &self.interval)
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh::REFRESH_INTERVAL;
    use crate::refresh::clock::test_helpers::ManualClock;
    use chrono::{Local, TimeZone};

    fn timer(id: u64, date: &str) -> Timer {
        Timer {
            id: TimerId(id),
            title: format!("timer {}", id),
            date: date.to_string(),
        }
    }

    fn board() -> TimerBoard {
        let now: DateTime<FixedOffset> = Local
            .with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
            .earliest()
            .unwrap()
            .fixed_offset();
        TimerBoard::new(Arc::new(ManualClock::new(now)), REFRESH_INTERVAL)
    }

    fn ids(board: &TimerBoard) -> Vec<u64> {
        board.entries().iter().map(|e| e.timer.id.0).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_mounts_in_list_order() {
        let mut board = board();
        let summary = board.sync(&[timer(2, "2025-06-01T00:00"), timer(1, "2024-06-01T00:00")]);

        assert_eq!(summary.mounted, 2);
        assert_eq!(ids(&board), vec![2, 1]);
        assert!(board.entries().iter().all(|e| e.view.is_some()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_leaves_unchanged_views_running() {
        let mut board = board();
        board.sync(&[timer(1, "2025-06-01T00:00")]);

        let mut renamed = timer(1, "2025-06-01T00:00");
        renamed.title = "renamed".to_string();
        let summary = board.sync(&[renamed]);

        assert!(summary.is_empty());
        let entry = board.get(TimerId(1)).unwrap();
        assert_eq!(entry.timer.title, "renamed");
        assert_eq!(entry.view.as_ref().unwrap().generation(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_retargets_changed_date() {
        let mut board = board();
        board.sync(&[timer(1, "2025-06-01T00:00")]);

        let summary = board.sync(&[timer(1, "2025-07-01T00:00")]);
        assert_eq!(summary.retargeted, 1);

        let view = board.get(TimerId(1)).unwrap().view.as_ref().unwrap();
        assert_eq!(view.generation(), 2);
        assert_eq!(
            view.target(),
            timer(1, "2025-07-01T00:00").target_instant().unwrap()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_unmounts_removed_timers() {
        let mut board = board();
        board.sync(&[timer(1, "2025-06-01T00:00"), timer(2, "2025-06-02T00:00")]);

        let summary = board.sync(&[timer(2, "2025-06-02T00:00")]);
        assert_eq!(summary.unmounted, 1);
        assert_eq!(ids(&board), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_date_has_no_view() {
        let mut board = board();
        let summary = board.sync(&[timer(1, "soon")]);

        assert_eq!(summary.mounted, 0);
        let entry = board.get(TimerId(1)).unwrap();
        assert!(entry.view.is_none());
        assert!(entry.error.as_deref().unwrap().contains("Invalid date"));

        // Fixing the date mounts it.
        let summary = board.sync(&[timer(1, "2025-06-01T00:00")]);
        assert_eq!(summary.mounted, 1);
        assert!(board.get(TimerId(1)).unwrap().error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_changed_resolves_on_tick() {
        let mut board = board();
        board.sync(&[timer(1, "2025-01-01T12:00:05")]);

        board.changed().await;
        let first = board.get(TimerId(1)).unwrap().frame().unwrap();
        assert_eq!(first.seq, 1);
        assert_eq!(first.countdown.breakdown.seconds, 5);

        board.changed().await;
        let second = board.get(TimerId(1)).unwrap().frame().unwrap();
        assert_eq!(second.seq, 2);
        assert_eq!(second.countdown.breakdown.seconds, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_changed_pends_when_empty() {
        let mut board = board();
        let result = tokio::time::timeout(Duration::from_secs(3), board.changed()).await;
        assert!(result.is_err());
    }
}
