// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod checksum;
pub mod error;
pub mod hal_traits;
pub mod reading;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From checksum.rs
pub use checksum::{calculate_checksum, verify_frame_checksum};

// From error.rs
pub use error::LinkError;

// From hal_traits.rs
pub use hal_traits::{SensorLine, SensorTimer};

// From reading.rs
pub use reading::{
    celsius_to_fahrenheit, combine_bytes, humidity_percent, temperature, temperature_celsius,
    temperature_fahrenheit, PhysicalReading, RawReading,
};

// From types.rs
pub use types::{Level, LineMode, TemperatureUnit};

// From timing.rs (constants - users can access via common::timing::*)
