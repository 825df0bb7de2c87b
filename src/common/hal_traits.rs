// src/common/hal_traits.rs

use super::types::{Level, LineMode};
use core::fmt::Debug;

/// Abstraction for the busy-wait delays required by the single-wire protocol.
///
/// Delays must block without yielding; the protocol decodes bits by sampling
/// at fixed offsets, so any time stolen mid-cycle corrupts the frame.
pub trait SensorTimer {
    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

/// Abstraction for the single open-drain data line.
pub trait SensorLine {
    /// Associated error type for pin errors.
    type Error: Debug;

    /// Switches the line between driving (`Output`) and released (`Input`).
    fn set_mode(&mut self, mode: LineMode) -> Result<(), Self::Error>;

    /// Drives the line to `level`. Only meaningful in `Output` mode.
    fn write_level(&mut self, level: Level) -> Result<(), Self::Error>;

    /// Reads the current line level.
    fn read_level(&mut self) -> Result<Level, Self::Error>;

    /// Non-blocking check that the line sits at `level`.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` while it does not, so callers can
    /// drive it from a bounded polling loop.
    fn poll_level(&mut self, level: Level) -> nb::Result<(), Self::Error> {
        match self.read_level() {
            Ok(current) if current == level => Ok(()),
            Ok(_) => Err(nb::Error::WouldBlock),
            Err(e) => Err(nb::Error::Other(e)),
        }
    }
}
