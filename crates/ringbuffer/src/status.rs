//! Runtime status values returned by put operations.
//!
//! Overwriting the oldest byte is expected behaviour for this buffer, so it
//! gets its own status instead of sharing a channel with errors.

/// Outcome of a single [`RingBuffer::put`](crate::RingBuffer::put).
///
/// The value is stored in both cases.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PutStatus {
    /// The buffer had room; nothing was discarded.
    Stored,
    /// The buffer was full; the oldest byte was discarded to make room.
    Overwrote,
}

impl PutStatus {
    /// `true` if the put discarded the oldest byte.
    pub fn overwrote(self) -> bool {
        self == Self::Overwrote
    }
}

/// Aggregate outcome of [`RingBuffer::put_many`](crate::RingBuffer::put_many).
///
/// Only records whether any overwrite happened, not how many.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PutManyStatus {
    /// Every byte went into a free slot.
    AllStored,
    /// At least one byte displaced an older one.
    SomeOverwritten,
}

impl PutManyStatus {
    /// `true` if at least one put discarded an older byte.
    pub fn overwrote(self) -> bool {
        self == Self::SomeOverwritten
    }

    /// Fold one more single-put outcome into the aggregate.
    pub(crate) fn merge(self, put: PutStatus) -> Self {
        match put {
            PutStatus::Overwrote => Self::SomeOverwritten,
            PutStatus::Stored => self,
        }
    }
}
