// src/link/sync_link/io_helpers.rs

use super::SyncLink;
use crate::common::{
    error::LinkError,
    hal_traits::{SensorLine, SensorTimer},
    types::{Level, LineMode},
};
use crate::link::config::as_micros_u32;
use core::time::Duration;
use nb::Result as NbResult;

// Implementation block for line and timing helpers
impl<IF> SyncLink<IF>
where
    IF: SensorLine + SensorTimer,
{
    /// Evaluates a non-blocking line operation (`f`) repeatedly until it stops
    /// returning `WouldBlock`, returning the final result or a timeout error.
    ///
    /// Time is accounted as the sum of the poll delays, so the budget is a
    /// lower bound on wall-clock time; slow pin reads stretch it.
    pub(super) fn wait_with_timeout<FN, T>(
        &mut self,
        timeout: Duration,
        mut f: FN,
    ) -> Result<T, LinkError<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        let budget_us = as_micros_u32(timeout);
        let step_us = as_micros_u32(self.config.poll_interval).max(1);
        let mut waited_us: u32 = 0;

        loop {
            match f(&mut self.interface) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if waited_us >= budget_us {
                        return Err(LinkError::Timeout);
                    }
                    self.interface.delay_us(step_us);
                    waited_us = waited_us.saturating_add(step_us);
                }
                Err(nb::Error::Other(e)) => return Err(LinkError::Io(e)),
            }
        }
    }

    /// Waits, within the edge budget, for the line to reach `level`.
    pub(super) fn wait_for_level(&mut self, level: Level) -> Result<(), LinkError<IF::Error>> {
        let timeout = self.config.edge_timeout;
        let result = self.wait_with_timeout(timeout, |line| line.poll_level(level));
        if matches!(result, Err(LinkError::Timeout)) {
            log::debug!("dht22: line never went {:?}", level);
        }
        result
    }

    /// Busy-waits for `duration` without touching the line.
    #[inline]
    pub(super) fn delay(&mut self, duration: Duration) {
        self.interface.delay_us(as_micros_u32(duration));
    }

    #[inline]
    pub(super) fn sample(&mut self) -> Result<Level, LinkError<IF::Error>> {
        self.interface.read_level().map_err(LinkError::Io)
    }

    /// Drives the wake-up pulse and releases the line to the sensor.
    pub(super) fn send_start_pulse(&mut self) -> Result<(), LinkError<IF::Error>> {
        self.interface.set_mode(LineMode::Output)?;
        self.interface.write_level(Level::Low)?;
        self.delay(self.config.start_low);

        self.interface.write_level(Level::High)?;
        self.delay(self.config.start_release);

        self.interface.set_mode(LineMode::Input)?;
        Ok(())
    }
}
