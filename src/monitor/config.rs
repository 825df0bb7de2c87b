// src/monitor/config.rs

use super::snapshot::Backlight;
use crate::common::{timing, types::TemperatureUnit};
use core::time::Duration;

/// Humidity correction applied to every snapshot, in %RH.
pub const DEFAULT_HUMIDITY_OFFSET: f32 = -7.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Period of the scheduled refresh.
    pub refresh_interval: Duration,
    /// Shortest gap allowed between two acquisitions.
    pub min_read_interval: Duration,
    /// Software calibration added to the measured humidity.
    pub humidity_offset: f32,
    pub initial_unit: TemperatureUnit,
    pub initial_backlight: Backlight,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            refresh_interval: timing::MIN_READ_INTERVAL,
            min_read_interval: timing::MIN_READ_INTERVAL,
            humidity_offset: DEFAULT_HUMIDITY_OFFSET,
            initial_unit: TemperatureUnit::Fahrenheit,
            initial_backlight: Backlight::On,
        }
    }
}

impl MonitorConfig {
    /// Sets the refresh period. It never drops below the minimum read interval.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval.max(self.min_read_interval);
        self
    }

    pub fn with_min_read_interval(mut self, interval: Duration) -> Self {
        self.min_read_interval = interval;
        self.refresh_interval = self.refresh_interval.max(interval);
        self
    }

    pub fn with_humidity_offset(mut self, offset: f32) -> Self {
        self.humidity_offset = offset;
        self
    }

    pub fn with_initial_unit(mut self, unit: TemperatureUnit) -> Self {
        self.initial_unit = unit;
        self
    }

    pub fn with_initial_backlight(mut self, backlight: Backlight) -> Self {
        self.initial_backlight = backlight;
        self
    }
}
