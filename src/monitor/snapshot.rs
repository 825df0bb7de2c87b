// src/monitor/snapshot.rs

use crate::common::{reading::PhysicalReading, types::TemperatureUnit};

/// Display backlight state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Backlight {
    #[default]
    On,
    Off,
}

impl Backlight {
    pub const fn toggled(self) -> Self {
        match self {
            Backlight::On => Backlight::Off,
            Backlight::Off => Backlight::On,
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Backlight::On)
    }
}

/// Already-debounced user input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    ToggleUnits,
    ToggleBacklight,
}

/// How current the values in a [`Snapshot`] are.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Freshness {
    /// Acquired by this refresh.
    Fresh,
    /// Reused because the sensor's minimum re-read interval had not elapsed.
    Cached,
    /// Reused because this refresh's acquisition failed.
    Stale,
}

/// Values for the display layer, already in the selected unit and calibrated.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub temperature: f32,
    pub unit: TemperatureUnit,
    pub humidity_percent: f32,
    pub backlight: Backlight,
    pub freshness: Freshness,
}

impl Snapshot {
    pub(crate) fn build(
        reading: PhysicalReading,
        humidity_offset: f32,
        unit: TemperatureUnit,
        backlight: Backlight,
        freshness: Freshness,
    ) -> Self {
        let calibrated = reading.with_humidity_offset(humidity_offset);
        Snapshot {
            temperature: calibrated.temperature(unit),
            unit,
            humidity_percent: calibrated.humidity_percent,
            backlight,
            freshness,
        }
    }
}
