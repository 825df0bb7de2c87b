// src/link/sync_link/mod.rs

mod io_helpers;
mod protocol_helpers;

use super::config::LinkConfig;
use crate::common::{
    checksum::verify_frame_checksum,
    error::LinkError,
    hal_traits::{SensorLine, SensorTimer},
    reading::{PhysicalReading, RawReading},
    types::Level,
};

/// Result of one acquisition cycle.
pub type AcquisitionOutcome<E> = Result<RawReading, LinkError<E>>;

/// Blocking driver for one DHT22/AM2302 sensor on a single open-drain line.
///
/// Every call to [`SyncLink::acquire_reading`] runs a full cycle to
/// completion: start pulse, ack check, 40-bit capture, checksum. The driver
/// keeps no reading state between calls and never retries internally. The
/// sensor needs about two seconds between cycles; pacing calls is up to the
/// caller (see [`crate::monitor::Monitor`]).
///
/// Bits are decoded by sampling at fixed offsets from busy-wait delays, so an
/// interrupt that steals more than a few microseconds mid-cycle can corrupt
/// the frame. Such corruption usually surfaces as `ChecksumMismatch` or
/// `Timeout`, but a lucky flip can pass the checksum.
#[derive(Debug)]
pub struct SyncLink<IF>
where
    IF: SensorLine + SensorTimer,
{
    interface: IF,
    config: LinkConfig,
}

impl<IF> SyncLink<IF>
where
    IF: SensorLine + SensorTimer,
{
    pub fn new(interface: IF) -> Self {
        Self::with_config(interface, LinkConfig::default())
    }

    pub fn with_config(interface: IF, config: LinkConfig) -> Self {
        SyncLink { interface, config }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub fn interface_mut(&mut self) -> &mut IF {
        &mut self.interface
    }

    /// Gives the line and timer back.
    pub fn release(self) -> IF {
        self.interface
    }

    // --- Public Blocking Methods ---

    /// Runs one acquisition cycle and returns the checksum-verified frame.
    pub fn acquire_reading(&mut self) -> AcquisitionOutcome<IF::Error> {
        log::trace!("dht22: start pulse");
        self.send_start_pulse()?;

        self.check_response()?;

        // Sensor ends its ack-high phase by pulling low for the first bit
        self.wait_for_level(Level::Low)?;

        let frame = self.capture_frame()?;
        log::trace!("dht22: captured frame {:02x?}", frame);

        verify_frame_checksum::<IF::Error>(&frame)?;

        let raw = RawReading::from_bytes(frame);
        log::debug!(
            "dht22: humidity {} %, temperature {} C",
            raw.humidity_percent(),
            raw.temperature_celsius()
        );
        Ok(raw)
    }

    /// Runs one acquisition cycle and converts the frame to physical units.
    pub fn read(&mut self) -> Result<PhysicalReading, LinkError<IF::Error>> {
        self.acquire_reading().map(|raw| raw.to_physical())
    }
}
