//! Injected time capability for budgeted search steps.
//!
//! The engine polls elapsed time while stepping so it can hand control back
//! to the host within a budget. Production code uses [`MonotonicClock`];
//! tests drive [`ManualClock`] explicitly so budget behavior is
//! deterministic.

use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// `now` returns the time elapsed since some fixed origin. Only differences
/// between two readings are meaningful.
pub trait TimeSource {
    /// Current reading of the clock.
    fn now(&mut self) -> Duration;
}

/// Wall-clock time source backed by [`Instant`].
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    #[inline]
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// A hand-advanced time source for tests.
///
/// Optionally ticks forward by a fixed amount on every reading, which lets a
/// test exhaust a budget after a known number of polls.
#[derive(Debug, Default)]
pub struct ManualClock {
    current: Duration,
    tick: Duration,
}

impl ManualClock {
    /// Create a clock frozen at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock that advances by `tick` on every `now` reading.
    pub fn ticking(tick: Duration) -> Self {
        Self {
            current: Duration::ZERO,
            tick,
        }
    }

    /// Advance the clock by `d`.
    pub fn advance(&mut self, d: Duration) {
        self.current += d;
    }
}

impl TimeSource for ManualClock {
    fn now(&mut self) -> Duration {
        let t = self.current;
        self.current += self.tick;
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_is_nondecreasing() {
        let mut clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_advances_only_on_demand() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(7));
        assert_eq!(clock.now(), Duration::from_millis(7));
    }

    #[test]
    fn ticking_clock_steps_each_reading() {
        let mut clock = ManualClock::ticking(Duration::from_millis(2));
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.now(), Duration::from_millis(2));
        assert_eq!(clock.now(), Duration::from_millis(4));
    }
}
