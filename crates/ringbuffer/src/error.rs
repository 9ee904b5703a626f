//! Construction errors.
//!
//! A badly sized backing store is a programming error, but it is reported
//! through a typed error rather than an abort so firmware can surface it on
//! its own terms. Runtime conditions (full, empty) are never errors; see
//! [`crate::status`].

use thiserror_no_std::Error;

/// Error returned by [`RingBuffer::new`](crate::RingBuffer::new) when the
/// storage slice cannot back a ring buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RingBufferError {
    /// Storage length is not a power of two (zero-length storage included).
    #[error("ring buffer capacity {capacity} is not a power of two")]
    NotPowerOfTwo {
        /// Length of the rejected storage slice.
        capacity: usize,
    },
    /// Storage length is a power of two but too small to hold any byte.
    #[error("ring buffer capacity {capacity} is below the minimum of {min}")]
    TooSmall {
        /// Length of the rejected storage slice.
        capacity: usize,
        /// Smallest accepted capacity.
        min: usize,
    },
}

impl RingBufferError {
    /// The storage length that was rejected.
    pub fn capacity(self) -> usize {
        match self {
            Self::NotPowerOfTwo { capacity } | Self::TooSmall { capacity, .. } => capacity,
        }
    }
}
