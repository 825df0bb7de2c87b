// src/common/checksum.rs

use super::error::LinkError;
use super::timing::FRAME_BYTES;

/// Calculates the frame checksum: the low 8 bits of the sum of the four
/// payload bytes.
#[inline]
pub const fn calculate_checksum(payload: [u8; 4]) -> u8 {
    payload[0]
        .wrapping_add(payload[1])
        .wrapping_add(payload[2])
        .wrapping_add(payload[3])
}

/// Verifies the fifth byte of a captured frame against its payload.
///
/// # Returns
///
/// `Ok(())` if the checksum matches, otherwise `LinkError::ChecksumMismatch`
/// carrying both values.
pub fn verify_frame_checksum<E: core::fmt::Debug>(frame: &[u8; FRAME_BYTES]) -> Result<(), LinkError<E>> {
    let expected = calculate_checksum([frame[0], frame[1], frame[2], frame[3]]);
    let received = frame[4];
    if expected == received {
        Ok(())
    } else {
        Err(LinkError::ChecksumMismatch { expected, received })
    }
}
