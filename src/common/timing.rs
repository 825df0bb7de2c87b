// src/common/timing.rs

use core::time::Duration;

// Nominal values from the DHT22/AM2302 datasheet. The sensor's own timing
// drifts by several microseconds; sample points sit mid-pulse so that drift
// does not flip a decision.

// === Start Pulse ===

/// Host holds the line low to wake the sensor (datasheet minimum is 1 ms).
pub const START_LOW: Duration = Duration::from_millis(5);
/// Host releases the line high before switching to input (datasheet 20-40 us).
pub const START_RELEASE: Duration = Duration::from_micros(30);

// === Response (Ack) ===

/// Sensor holds the line low for this long to acknowledge.
pub const ACK_LOW: Duration = Duration::from_micros(80);
/// Sensor then holds the line high for this long before the first bit.
pub const ACK_HIGH: Duration = Duration::from_micros(80);
/// Delay after release before sampling the ack-low phase.
pub const ACK_LOW_SAMPLE: Duration = Duration::from_micros(40);
/// Delay after the first sample before sampling the ack-high phase.
pub const ACK_HIGH_SAMPLE: Duration = Duration::from_micros(80);

// === Data Bits ===

/// Low gap preceding every data bit.
pub const BIT_LOW: Duration = Duration::from_micros(50);
/// High pulse width encoding a `0` (26-28 us).
pub const BIT_ZERO_HIGH: Duration = Duration::from_micros(27);
/// High pulse width encoding a `1`.
pub const BIT_ONE_HIGH: Duration = Duration::from_micros(70);
/// Sample point after the rising edge of a bit: past a `0`, inside a `1`.
pub const BIT_SAMPLE: Duration = Duration::from_micros(40);

/// Bits in one frame: humidity (16), temperature (16), checksum (8).
pub const FRAME_BITS: usize = 40;
/// Bytes in one frame.
pub const FRAME_BYTES: usize = FRAME_BITS / 8;

// === Bounded Waits ===

/// Budget for any single edge wait. Longest legitimate level is ~80 us.
pub const EDGE_TIMEOUT: Duration = Duration::from_micros(100);
/// Busy-wait between two polls of the line while waiting for an edge.
pub const POLL_INTERVAL: Duration = Duration::from_micros(1);

// === Cadence ===

/// Minimum interval between two acquisitions the sensor tolerates.
pub const MIN_READ_INTERVAL: Duration = Duration::from_secs(2);
