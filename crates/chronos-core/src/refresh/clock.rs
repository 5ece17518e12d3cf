use chrono::{DateTime, FixedOffset, Local};

/// Source of the current instant for tick sources.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Host wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

#[doc(hidden)]
pub mod test_helpers {
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, FixedOffset, TimeDelta};
    use tokio::time::Instant;

    use super::Clock;

    /// Clock pinned to a chosen instant that then moves with tokio's clock.
    ///
    /// Under `start_paused` tests it only advances when tokio time does.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        state: Arc<Mutex<(DateTime<FixedOffset>, Instant)>>,
    }

    impl ManualClock {
        pub fn new(at: DateTime<FixedOffset>) -> Self {
            Self {
                state: Arc::new(Mutex::new((at, Instant::now()))),
            }
        }

        /// Jump to `at`.
        pub fn set(&self, at: DateTime<FixedOffset>) {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            *state = (at, Instant::now());
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<FixedOffset> {
            let (base, anchor) = *self.state.lock().unwrap_or_else(|e| e.into_inner());
            base + TimeDelta::from_std(anchor.elapsed()).unwrap_or(TimeDelta::zero())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::ManualClock;
    use super::*;
    use std::time::Duration;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_clock_follows_tokio_time() {
        let clock = ManualClock::new(at("2025-01-01T00:00:00+00:00"));
        tokio::time::advance(Duration::from_secs(90)).await;
        assert_eq!(clock.now(), at("2025-01-01T00:01:30+00:00"));

        clock.set(at("2030-06-01T12:00:00+02:00"));
        assert_eq!(clock.now(), at("2030-06-01T12:00:00+02:00"));
    }

    #[test]
    fn test_system_clock_is_local() {
        let now = SystemClock.now();
        let local = Local::now().fixed_offset();
        assert_eq!(now.offset(), local.offset());
        assert!((local - now).num_seconds().abs() < 5);
    }
}
