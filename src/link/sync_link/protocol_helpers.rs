// src/link/sync_link/protocol_helpers.rs

use super::SyncLink;
use crate::common::{
    error::LinkError,
    hal_traits::{SensorLine, SensorTimer},
    timing::FRAME_BYTES,
    types::Level,
};

impl<IF> SyncLink<IF>
where
    IF: SensorLine + SensorTimer,
{
    /// Checks the sensor's ack: low for ~80 us, then high for ~80 us.
    ///
    /// Samples once inside each phase rather than timing the edges.
    pub(super) fn check_response(&mut self) -> Result<(), LinkError<IF::Error>> {
        self.delay(self.config.ack_low_sample);
        if self.sample()? != Level::Low {
            log::debug!("dht22: ack-low phase missing");
            return Err(LinkError::NoResponse);
        }

        self.delay(self.config.ack_high_sample);
        if self.sample()? != Level::High {
            log::debug!("dht22: ack-high phase missing");
            return Err(LinkError::NoResponse);
        }

        Ok(())
    }

    /// Decodes one bit. Expects the line low (inter-bit gap) on entry and
    /// leaves it low on exit.
    ///
    /// A `0` is a ~27 us high pulse, a `1` ~70 us; sampling at the configured
    /// offset after the rising edge tells them apart.
    pub(super) fn capture_bit(&mut self) -> Result<bool, LinkError<IF::Error>> {
        self.wait_for_level(Level::High)?;
        self.delay(self.config.bit_sample);
        let bit = self.sample()?.is_high();
        self.wait_for_level(Level::Low)?;
        Ok(bit)
    }

    /// Captures the 40-bit frame, most significant bit of each byte first.
    pub(super) fn capture_frame(&mut self) -> Result<[u8; FRAME_BYTES], LinkError<IF::Error>> {
        let mut frame = [0u8; FRAME_BYTES];
        for byte in frame.iter_mut() {
            let mut value = 0u8;
            for _ in 0..8 {
                value = (value << 1) | u8::from(self.capture_bit()?);
            }
            *byte = value;
        }
        Ok(frame)
    }
}
