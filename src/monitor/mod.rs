// src/monitor/mod.rs

//! Periodic and event-driven use of the sensor link.
//!
//! Holds the user-facing state of a small readout: selected unit, backlight,
//! humidity calibration and the last good reading. Produces [`Snapshot`]s for
//! whatever renders them; formatting and debouncing stay with the caller.

pub mod cadence;
pub mod config;
pub mod snapshot;

pub use cadence::Cadence;
pub use config::MonitorConfig;
pub use snapshot::{Backlight, ButtonEvent, Freshness, Snapshot};

use crate::common::{
    error::LinkError,
    hal_traits::{SensorLine, SensorTimer},
    reading::PhysicalReading,
    types::TemperatureUnit,
};
use crate::link::SyncLink;
use core::fmt::Debug;
use core::time::Duration;

/// Why a refresh produced no snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonitorError<E = ()>
where
    E: Debug,
{
    /// Acquisition failed and there is no earlier reading to fall back on,
    /// or the line itself failed.
    #[error("Sensor link failed: {0}")]
    Link(LinkError<E>),

    /// Nothing has been read yet and the sensor is still inside its minimum
    /// re-read interval.
    #[error("No reading available yet")]
    NotReady,
}

impl<E: Debug> MonitorError<E> {
    /// The data line is unusable; retrying will not help.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, MonitorError::Link(LinkError::Io(_)))
    }
}

/// Drives a [`SyncLink`] on a fixed cadence and on button events.
///
/// `&mut self` on every entry point keeps acquisitions serialized; a timer
/// tick and a button handler sharing one `Monitor` need a critical section
/// or a single owning task.
#[derive(Debug)]
pub struct Monitor<IF>
where
    IF: SensorLine + SensorTimer,
{
    link: SyncLink<IF>,
    config: MonitorConfig,
    unit: TemperatureUnit,
    backlight: Backlight,
    cadence: Cadence,
    last_reading: Option<PhysicalReading>,
    // Time since the last acquisition attempt; None before the first one
    since_last_read: Option<Duration>,
}

impl<IF> Monitor<IF>
where
    IF: SensorLine + SensorTimer,
{
    /// The first [`Monitor::tick`] refreshes immediately.
    pub fn new(link: SyncLink<IF>, config: MonitorConfig) -> Self {
        Monitor {
            link,
            unit: config.initial_unit,
            backlight: config.initial_backlight,
            cadence: Cadence::due_now(config.refresh_interval),
            last_reading: None,
            since_last_read: None,
            config,
        }
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn backlight(&self) -> Backlight {
        self.backlight
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Last successfully acquired reading, uncalibrated.
    pub fn last_reading(&self) -> Option<PhysicalReading> {
        self.last_reading
    }

    pub fn release(self) -> SyncLink<IF> {
        self.link
    }

    /// Advances time by `elapsed`; refreshes when the cadence comes due.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Result<Snapshot, MonitorError<IF::Error>>> {
        if let Some(since) = self.since_last_read.as_mut() {
            *since = since.saturating_add(elapsed);
        }
        self.cadence.advance(elapsed);
        if !self.cadence.is_due() {
            return None;
        }
        self.cadence.restart();
        Some(self.refresh())
    }

    /// Applies a button press and refreshes.
    pub fn handle(&mut self, event: ButtonEvent) -> Result<Snapshot, MonitorError<IF::Error>> {
        match event {
            ButtonEvent::ToggleUnits => {
                self.unit = self.unit.toggled();
                log::info!("monitor: units now {}", self.unit.symbol());
            }
            ButtonEvent::ToggleBacklight => {
                self.backlight = self.backlight.toggled();
                log::info!("monitor: backlight on = {}", self.backlight.is_on());
            }
        }
        self.refresh()
    }

    /// Acquires a new reading if the sensor allows it, otherwise reuses the
    /// last one.
    pub fn refresh(&mut self) -> Result<Snapshot, MonitorError<IF::Error>> {
        if !self.may_acquire() {
            log::trace!("monitor: inside minimum read interval, reusing last reading");
            return self
                .last_reading
                .map(|reading| self.snapshot(reading, Freshness::Cached))
                .ok_or(MonitorError::NotReady);
        }

        self.since_last_read = Some(Duration::ZERO);
        match self.link.read() {
            Ok(reading) => {
                self.last_reading = Some(reading);
                Ok(self.snapshot(reading, Freshness::Fresh))
            }
            Err(e) if !e.is_recoverable() => {
                log::error!("monitor: sensor line failed: {}", e);
                Err(MonitorError::Link(e))
            }
            Err(e) => {
                log::warn!("monitor: acquisition failed: {}", e);
                match self.last_reading {
                    Some(reading) => Ok(self.snapshot(reading, Freshness::Stale)),
                    None => Err(MonitorError::Link(e)),
                }
            }
        }
    }

    fn may_acquire(&self) -> bool {
        match self.since_last_read {
            Some(since) => since >= self.config.min_read_interval,
            None => true,
        }
    }

    fn snapshot(&self, reading: PhysicalReading, freshness: Freshness) -> Snapshot {
        Snapshot::build(
            reading,
            self.config.humidity_offset,
            self.unit,
            self.backlight,
            freshness,
        )
    }
}
