// src/lib.rs

//! Bit-banged driver for the DHT22/AM2302 single-wire humidity and
//! temperature sensor.
//!
//! - [`link::SyncLink`] runs one blocking acquisition cycle over any line
//!   implementing [`SensorLine`] + [`SensorTimer`] (or an embedded-hal pin via
//!   [`link::HalLine`]).
//! - [`common::reading`] turns the raw frame into physical units.
//! - [`monitor::Monitor`] paces acquisitions and keeps unit/backlight state
//!   for a small readout.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod common;
pub mod link;
pub mod monitor;

// Re-export key types for convenience
pub use common::{LinkError, PhysicalReading, RawReading, SensorLine, SensorTimer, TemperatureUnit};
pub use link::SyncLink;
