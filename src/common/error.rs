// src/common/error.rs

/// Failure reasons for one acquisition cycle.
///
/// `NoResponse`, `Timeout` and `ChecksumMismatch` are transient: the caller may
/// retry once the sensor's minimum re-read interval has elapsed. `Io` means the
/// pin driver itself failed and the data line is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying pin error from the HAL implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// Sensor did not acknowledge the start pulse.
    #[error("Sensor did not acknowledge the start pulse")]
    NoResponse,

    /// The line never reached the expected level within its time budget.
    #[error("Timed out waiting for a line transition")]
    Timeout,

    /// The fifth byte does not match the sum of the four payload bytes.
    #[error("Checksum mismatch: expected {expected:#04x}, received {received:#04x}")]
    ChecksumMismatch { expected: u8, received: u8 },
}

impl<E: core::fmt::Debug> LinkError<E> {
    /// Whether a later acquisition attempt can reasonably succeed.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, LinkError::Io(_))
    }
}

// Allow mapping from underlying HAL error with `?`
impl<E: core::fmt::Debug> From<E> for LinkError<E> {
    fn from(e: E) -> Self {
        LinkError::Io(e)
    }
}
