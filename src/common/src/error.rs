//! Error types for the keyboard link.

use core::fmt;

/// Ways an 11-bit PS/2 frame can be malformed.
///
/// Only reported when frame checking is enabled; the legacy firmware
/// accepts every frame as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FrameError {
    /// The start bit was sampled high.
    MissingStartBit,
    /// Data bits plus parity bit did not have odd parity.
    ParityMismatch,
    /// The stop bit was sampled low.
    MissingStopBit,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::MissingStartBit => write!(f, "start bit not low"),
            FrameError::ParityMismatch => write!(f, "odd parity check failed"),
            FrameError::MissingStopBit => write!(f, "stop bit not high"),
        }
    }
}
