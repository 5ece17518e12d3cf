use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::countdown::{Countdown, compute_countdown};

use super::clock::Clock;

/// One published recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Target the countdown was computed against.
    pub target: DateTime<FixedOffset>,
    pub countdown: Countdown,
    /// Tick number within the tick source that produced it, starting at 1.
    pub seq: u64,
    /// Which tick source of this view produced it, starting at 1.
    pub generation: u64,
}

struct TickSource {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Display component for one mounted timer.
///
/// While mounted, a tokio task recomputes the countdown every `interval`
/// and publishes it as a [`Frame`]. The first frame is computed right away.
/// Changing the target replaces the task; unmounting or dropping the view
/// stops it.
///
/// Must be created inside a tokio runtime.
pub struct TimerView {
    target: DateTime<FixedOffset>,
    clock: Arc<dyn Clock>,
    interval: Duration,
    tx: Arc<watch::Sender<Option<Frame>>>,
    rx: watch::Receiver<Option<Frame>>,
    source: Option<TickSource>,
    generation: u64,
}

impl TimerView {
    pub fn mount(target: DateTime<FixedOffset>, clock: Arc<dyn Clock>, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(None);
        let mut view = Self {
            target,
            clock,
            interval,
            tx: Arc::new(tx),
            rx,
            source: None,
            generation: 0,
        };
        view.start();
        view
    }

    pub fn target(&self) -> DateTime<FixedOffset> {
        self.target
    }

    /// Latest published frame, if any tick has run yet.
    pub fn frame(&self) -> Option<Frame> {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Frame>> {
        self.tx.subscribe()
    }

    pub fn is_ticking(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| !source.handle.is_finished())
    }

    /// Number of tick sources started so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Point the view at a new target.
    ///
    /// The old tick source is stopped before the new one starts, and the
    /// new one publishes immediately. Same target is a no-op.
    pub fn retarget(&mut self, target: DateTime<FixedOffset>) {
        if target == self.target && self.source.is_some() {
            return;
        }
        self.stop();
        self.target = target;
        self.start();
    }

    /// Stop ticking. The last frame stays readable.
    pub fn unmount(&mut self) {
        if self.source.is_some() {
            self.stop();
            debug!(event = "core.refresh.view_unmounted", generation = self.generation);
        }
    }

    pub(crate) fn receiver_mut(&mut self) -> &mut watch::Receiver<Option<Frame>> {
        &mut self.rx
    }

    fn start(&mut self) {
        self.generation += 1;
        let token = CancellationToken::new();
        let handle = tokio::spawn(run_ticks(
            Arc::clone(&self.tx),
            token.clone(),
            Arc::clone(&self.clock),
            self.target,
            self.interval,
            self.generation,
        ));
        self.source = Some(TickSource { token, handle });
        debug!(
            event = "core.refresh.tick_started",
            target = %self.target,
            generation = self.generation,
            interval_ms = self.interval.as_millis() as u64
        );
    }

    fn stop(&mut self) {
        let Some(source) = self.source.take() else {
            return;
        };
        // Cancelling under the channel lock means no frame from this source
        // can land after we return.
        self.tx.send_if_modified(|_| {
            source.token.cancel();
            false
        });
        source.handle.abort();
        debug!(event = "core.refresh.tick_stopped", generation = self.generation);
    }
}

impl Drop for TimerView {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for TimerView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerView")
            .field("target", &self.target)
            .field("interval", &self.interval)
            .field("generation", &self.generation)
            .field("ticking", &self.is_ticking())
            .finish()
    }
}

async fn run_ticks(
    tx: Arc<watch::Sender<Option<Frame>>>,
    token: CancellationToken,
    clock: Arc<dyn Clock>,
    target: DateTime<FixedOffset>,
    interval: Duration,
    generation: u64,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut seq = 0;

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        seq += 1;
        let countdown = compute_countdown(&target, &clock.now());
        let published = tx.send_if_modified(|slot| {
            if token.is_cancelled() {
                return false;
            }
            *slot = Some(Frame {
                target,
                countdown,
                seq,
                generation,
            });
            true
        });

        if !published {
            break;
        }
    }
}
