// src/link/config.rs

use crate::common::timing;
use core::time::Duration;

/// Timing parameters for one acquisition cycle.
///
/// Defaults follow the datasheet (see [`timing`]). Boards with slow GPIO
/// reads or a fast core may need to shift the sample points.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LinkConfig {
    /// How long the host holds the line low to wake the sensor.
    pub start_low: Duration,
    /// How long the host drives the line high before releasing it.
    pub start_release: Duration,
    /// Delay from release to the ack-low sample.
    pub ack_low_sample: Duration,
    /// Delay from the ack-low sample to the ack-high sample.
    pub ack_high_sample: Duration,
    /// Delay from a bit's rising edge to its sample point.
    pub bit_sample: Duration,
    /// Budget for each wait on a line transition.
    pub edge_timeout: Duration,
    /// Busy-wait between polls while waiting on a transition.
    pub poll_interval: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        LinkConfig {
            start_low: timing::START_LOW,
            start_release: timing::START_RELEASE,
            ack_low_sample: timing::ACK_LOW_SAMPLE,
            ack_high_sample: timing::ACK_HIGH_SAMPLE,
            bit_sample: timing::BIT_SAMPLE,
            edge_timeout: timing::EDGE_TIMEOUT,
            poll_interval: timing::POLL_INTERVAL,
        }
    }
}

impl LinkConfig {
    pub fn with_start_low(mut self, start_low: Duration) -> Self {
        self.start_low = start_low;
        self
    }

    pub fn with_start_release(mut self, start_release: Duration) -> Self {
        self.start_release = start_release;
        self
    }

    pub fn with_bit_sample(mut self, bit_sample: Duration) -> Self {
        self.bit_sample = bit_sample;
        self
    }

    pub fn with_edge_timeout(mut self, edge_timeout: Duration) -> Self {
        self.edge_timeout = edge_timeout;
        self
    }

    /// Sets the polling step. A zero interval is bumped to 1 us so that every
    /// bounded wait still makes progress towards its budget.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval.max(Duration::from_micros(1));
        self
    }
}

/// Converts a duration to whole microseconds for the timer, saturating.
#[inline]
pub(crate) fn as_micros_u32(duration: Duration) -> u32 {
    u32::try_from(duration.as_micros()).unwrap_or(u32::MAX)
}
