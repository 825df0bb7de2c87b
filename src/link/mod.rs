// src/link/mod.rs

pub mod config;
pub mod sync_link;

#[cfg(feature = "impl-embedded-hal")]
pub mod adapter;

#[cfg(test)]
pub(crate) mod mock;

// Re-export the public driver types
pub use config::LinkConfig;
pub use sync_link::{AcquisitionOutcome, SyncLink};

#[cfg(feature = "impl-embedded-hal")]
pub use adapter::HalLine;
