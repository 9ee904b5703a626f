//! Overwrite-on-full byte ring buffer over borrowed storage.
//!
//! `RingBuffer<'a>` binds a caller-owned `&'a mut [u8]` and never allocates.
//! The storage length is the capacity and must be a power of two, so index
//! wrap-around is a bitwise AND with `capacity - 1` instead of a modulo.
//!
//! # Constraints
//!
//! - Capacity is a power of two and at least [`MIN_CAPACITY`]; checked once
//!   in [`RingBuffer::new`].
//! - At most `capacity - 1` bytes are live. The spare slot is what lets
//!   "empty" and "full" be derived from the two indices without a counter.
//! - This implementation is **not** interrupt-safe. It holds a unique borrow
//!   of its storage, so sharing it between Embassy tasks or an ISR requires
//!   the caller's own `Mutex`.

use crate::error::RingBufferError;
use crate::inspect::{Dump, Iter};
use crate::status::{PutManyStatus, PutStatus};

/// Smallest storage length accepted by [`RingBuffer::new`].
///
/// With a single slot the spare-slot scheme leaves no room for data.
pub const MIN_CAPACITY: usize = 2;

/// `true` if `capacity` bytes of storage can back a [`RingBuffer`].
///
/// Usable in `const` context, e.g. to reject a bad buffer size at compile
/// time:
///
/// ```
/// const RX_SIZE: usize = 64;
/// const _: () = assert!(ringbuffer::is_valid_capacity(RX_SIZE));
/// ```
pub const fn is_valid_capacity(capacity: usize) -> bool {
    capacity >= MIN_CAPACITY && capacity.is_power_of_two()
}

/// Advance `index` by one slot, wrapping with `mask` (`capacity - 1`).
#[inline]
pub const fn advance(index: usize, mask: usize) -> usize {
    index.wrapping_add(1) & mask
}

/// A fixed-capacity byte FIFO that overwrites its oldest byte when full.
pub struct RingBuffer<'a> {
    storage: &'a mut [u8],
    /// `capacity - 1`.
    mask: usize,
    /// Next slot to read from (tail).
    read: usize,
    /// Next slot to write to (head).
    write: usize,
}

impl<'a> RingBuffer<'a> {
    /// Bind `storage` as an empty ring buffer.
    ///
    /// The capacity is `storage.len()`. Existing storage contents are left
    /// in place but are not considered live.
    ///
    /// # Errors
    ///
    /// - [`RingBufferError::NotPowerOfTwo`] if `storage.len()` is not a power
    ///   of two (this includes an empty slice).
    /// - [`RingBufferError::TooSmall`] if `storage.len()` is below
    ///   [`MIN_CAPACITY`].
    pub fn new(storage: &'a mut [u8]) -> Result<Self, RingBufferError> {
        let capacity = storage.len();
        if !capacity.is_power_of_two() {
            return Err(RingBufferError::NotPowerOfTwo { capacity });
        }
        if capacity < MIN_CAPACITY {
            return Err(RingBufferError::TooSmall {
                capacity,
                min: MIN_CAPACITY,
            });
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("ring buffer bound: capacity={=usize}", capacity);
        #[cfg(feature = "tracing")]
        tracing::debug!(capacity, "ring buffer bound");

        Ok(Self {
            storage,
            mask: capacity.wrapping_sub(1),
            read: 0,
            write: 0,
        })
    }

    /// Discard all live bytes by resetting both indices to 0.
    ///
    /// Storage contents are not touched. Calling this on an empty buffer is
    /// a no-op.
    pub fn clear(&mut self) {
        self.read = 0;
        self.write = 0;
    }

    /// Store `value`, discarding the oldest byte first if the buffer is full.
    ///
    /// The value is always stored; the returned status only tells whether an
    /// older byte was sacrificed for it.
    #[allow(clippy::indexing_slicing)] // write <= mask < storage.len() by construction
    pub fn put(&mut self, value: u8) -> PutStatus {
        let status = if self.is_full() {
            #[cfg(feature = "defmt")]
            defmt::trace!("ring buffer full, overwrote slot {=usize}", self.read);
            #[cfg(feature = "tracing")]
            tracing::trace!(slot = self.read, "ring buffer full, overwrote oldest byte");

            self.read = advance(self.read, self.mask);
            PutStatus::Overwrote
        } else {
            PutStatus::Stored
        };

        self.storage[self.write] = value;
        self.write = advance(self.write, self.mask);
        status
    }

    /// Take the oldest live byte, or `None` if the buffer is empty.
    #[allow(clippy::indexing_slicing)] // read <= mask < storage.len() by construction
    pub fn get(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let value = self.storage[self.read];
        self.read = advance(self.read, self.mask);
        Some(value)
    }

    /// [`put`](Self::put) every byte of `values` in order.
    ///
    /// Every byte is stored. Returns [`PutManyStatus::SomeOverwritten`] if
    /// any of them displaced an older byte; an empty slice reports
    /// [`PutManyStatus::AllStored`].
    pub fn put_many(&mut self, values: &[u8]) -> PutManyStatus {
        values
            .iter()
            .fold(PutManyStatus::AllStored, |acc, &value| acc.merge(self.put(value)))
    }

    /// Move up to `out.len()` of the oldest live bytes into `out`.
    ///
    /// Stops when `out` is full or the buffer runs empty, whichever comes
    /// first, and returns the number of bytes written. Slots of `out` past
    /// that count are left untouched. Never waits for more data.
    pub fn get_many(&mut self, out: &mut [u8]) -> usize {
        out.iter_mut()
            .map_while(|slot| self.get().map(|value| *slot = value))
            .count()
    }

    /// Drain up to `M` of the oldest live bytes into a `heapless::Vec`.
    pub fn drain_to_vec<const M: usize>(&mut self) -> heapless::Vec<u8, M> {
        let mut out = heapless::Vec::new();
        while !out.is_full() {
            let Some(value) = self.get() else { break };
            if out.push(value).is_err() {
                break;
            }
        }
        out
    }

    /// `true` when no bytes are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.write == self.read
    }

    /// `true` when `capacity - 1` bytes are live; the next put overwrites.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.mask
    }

    /// Number of live bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.write.wrapping_sub(self.read) & self.mask
    }

    /// Length of the backing storage.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Most bytes that can be live at once (`capacity - 1`).
    pub fn usable_capacity(&self) -> usize {
        self.mask
    }

    /// Index wrap mask (`capacity - 1`).
    pub(crate) fn mask(&self) -> usize {
        self.mask
    }

    /// Bytes that can be put before the next put overwrites.
    pub fn free(&self) -> usize {
        self.mask.saturating_sub(self.len())
    }

    /// Current tail position.
    pub fn read_index(&self) -> usize {
        self.read
    }

    /// Current head position.
    pub fn write_index(&self) -> usize {
        self.write
    }

    /// Iterate live bytes from oldest to newest without consuming them.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&*self.storage, self.read, self.mask, self.len())
    }

    /// Human-readable view of the indices and every live slot.
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(self)
    }

    /// Release the storage borrow back to the caller.
    pub fn into_storage(self) -> &'a mut [u8] {
        self.storage
    }
}

impl<'r> IntoIterator for &'r RingBuffer<'_> {
    type Item = u8;
    type IntoIter = Iter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl core::fmt::Debug for RingBuffer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("read", &self.read)
            .field("write", &self.write)
            .field("len", &self.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
