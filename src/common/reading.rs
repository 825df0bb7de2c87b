// src/common/reading.rs

use super::checksum::calculate_checksum;
use super::timing::FRAME_BYTES;
use super::types::TemperatureUnit;

/// Sign flag in the high temperature byte.
const TEMPERATURE_SIGN_BIT: u8 = 0x80;

// --- Raw-to-Physical Conversion ---

/// Combines a high and low byte into a big-endian 16-bit value.
#[inline]
pub const fn combine_bytes(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// Relative humidity in percent. The sensor sends tenths of a percent.
#[inline]
pub fn humidity_percent(high: u8, low: u8) -> f32 {
    f32::from(combine_bytes(high, low)) / 10.0
}

/// Temperature in degrees Celsius.
///
/// The sensor sends tenths of a degree as sign-magnitude: bit 7 of `high`
/// is the sign and is not part of the magnitude.
#[inline]
pub fn temperature_celsius(high: u8, low: u8) -> f32 {
    let magnitude = f32::from(combine_bytes(high & !TEMPERATURE_SIGN_BIT, low)) / 10.0;
    if high & TEMPERATURE_SIGN_BIT != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Temperature in degrees Fahrenheit.
#[inline]
pub fn temperature_fahrenheit(high: u8, low: u8) -> f32 {
    celsius_to_fahrenheit(temperature_celsius(high, low))
}

/// Temperature in the requested unit.
#[inline]
pub fn temperature(high: u8, low: u8, unit: TemperatureUnit) -> f32 {
    match unit {
        TemperatureUnit::Celsius => temperature_celsius(high, low),
        TemperatureUnit::Fahrenheit => temperature_fahrenheit(high, low),
    }
}

#[inline]
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

// --- Raw Reading ---

/// One complete frame as captured from the wire.
///
/// Only constructible from all five bytes at once, so a partially captured
/// frame can never be observed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawReading {
    humidity_high: u8,
    humidity_low: u8,
    temperature_high: u8,
    temperature_low: u8,
    checksum: u8,
}

impl RawReading {
    pub const fn new(
        humidity_high: u8,
        humidity_low: u8,
        temperature_high: u8,
        temperature_low: u8,
        checksum: u8,
    ) -> Self {
        RawReading {
            humidity_high,
            humidity_low,
            temperature_high,
            temperature_low,
            checksum,
        }
    }

    /// Builds a reading from bytes in wire order.
    pub const fn from_bytes(bytes: [u8; FRAME_BYTES]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3], bytes[4])
    }

    /// Bytes in wire order.
    pub const fn as_bytes(&self) -> [u8; FRAME_BYTES] {
        [
            self.humidity_high,
            self.humidity_low,
            self.temperature_high,
            self.temperature_low,
            self.checksum,
        ]
    }

    #[inline]
    pub const fn humidity_high(&self) -> u8 {
        self.humidity_high
    }

    #[inline]
    pub const fn humidity_low(&self) -> u8 {
        self.humidity_low
    }

    #[inline]
    pub const fn temperature_high(&self) -> u8 {
        self.temperature_high
    }

    #[inline]
    pub const fn temperature_low(&self) -> u8 {
        self.temperature_low
    }

    #[inline]
    pub const fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Checksum the payload bytes call for.
    pub const fn expected_checksum(&self) -> u8 {
        calculate_checksum([
            self.humidity_high,
            self.humidity_low,
            self.temperature_high,
            self.temperature_low,
        ])
    }

    pub const fn is_checksum_valid(&self) -> bool {
        self.expected_checksum() == self.checksum
    }

    pub fn humidity_percent(&self) -> f32 {
        humidity_percent(self.humidity_high, self.humidity_low)
    }

    pub fn temperature_celsius(&self) -> f32 {
        temperature_celsius(self.temperature_high, self.temperature_low)
    }

    pub fn temperature_fahrenheit(&self) -> f32 {
        temperature_fahrenheit(self.temperature_high, self.temperature_low)
    }

    pub fn temperature(&self, unit: TemperatureUnit) -> f32 {
        temperature(self.temperature_high, self.temperature_low, unit)
    }

    pub fn to_physical(&self) -> PhysicalReading {
        PhysicalReading {
            humidity_percent: self.humidity_percent(),
            temperature_celsius: self.temperature_celsius(),
        }
    }
}

impl From<RawReading> for PhysicalReading {
    fn from(raw: RawReading) -> Self {
        raw.to_physical()
    }
}

// --- Physical Reading ---

/// Humidity and temperature decoded from a [`RawReading`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhysicalReading {
    /// Relative humidity (% RH).
    pub humidity_percent: f32,
    /// Temperature (°C).
    pub temperature_celsius: f32,
}

impl PhysicalReading {
    pub fn temperature_fahrenheit(&self) -> f32 {
        celsius_to_fahrenheit(self.temperature_celsius)
    }

    pub fn temperature(&self, unit: TemperatureUnit) -> f32 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_celsius,
            TemperatureUnit::Fahrenheit => self.temperature_fahrenheit(),
        }
    }

    /// Applies a software calibration offset to the humidity, clamped to 0..=100 %.
    pub fn with_humidity_offset(self, offset: f32) -> Self {
        PhysicalReading {
            humidity_percent: (self.humidity_percent + offset).clamp(0.0, 100.0),
            ..self
        }
    }
}
