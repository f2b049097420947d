//! Fixed-interval tick scheduling
use std::time::{Duration, Instant};

/// Tracks when the next tick of the game is due.
///
/// The deadline for a tick is only set once the caller comes back asking how
/// long to wait, which happens after the previous tick has been applied and
/// drawn.  Ticks therefore never overlap with each other or with rendering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    interval: Duration,
    next_tick: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new(interval: Duration) -> Ticker {
        Ticker {
            interval,
            next_tick: None,
        }
    }

    /// Return how much time is left, as of `now`, before the next tick is
    /// due, scheduling the tick one interval from `now` if it isn't scheduled
    /// yet
    pub(crate) fn time_left(&mut self, now: Instant) -> Duration {
        let when = *self.next_tick.get_or_insert(now + self.interval);
        when.saturating_duration_since(now)
    }

    /// Record that the pending tick has been performed
    pub(crate) fn fire(&mut self) {
        self.next_tick = None;
    }

    /// Drop the pending tick without performing it.  The next call to
    /// [`Ticker::time_left()`] schedules a full interval from then.
    pub(crate) fn hold(&mut self) {
        self.next_tick = None;
    }
}
