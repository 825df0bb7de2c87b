// src/monitor/cadence.rs

use core::time::Duration;

/// Count-down timer driven by elapsed time reported from the caller's tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Cadence {
    interval: Duration,
    remaining: Duration,
}

impl Cadence {
    /// A timer that fires one full `interval` from now.
    pub const fn new(interval: Duration) -> Self {
        Cadence { interval, remaining: interval }
    }

    /// A timer that is already due.
    pub const fn due_now(interval: Duration) -> Self {
        Cadence { interval, remaining: Duration::ZERO }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.remaining = self.remaining.saturating_sub(elapsed);
    }

    pub fn is_due(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Starts the next full interval.
    pub fn restart(&mut self) {
        self.remaining = self.interval;
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
